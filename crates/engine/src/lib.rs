// crates/engine/src/lib.rs

//! Public facade for the Que root pinning engine.
//! Answers whether a TLS root certificate's public key is one of the pinned
//! trusted roots. Intended to be called from a certificate-validation callback
//! after the TLS stack has built and validated the chain.

pub mod crypto;
pub mod domain;
pub mod roots;

/// Whether `public_key` (the root certificate's `subjectPublicKey` bytes) is a
/// built-in trusted root. Empty or malformed input is simply untrusted.
pub fn is_trusted_bytes(public_key: &[u8]) -> bool {
    builtin_registry().is_trusted_bytes(public_key)
}

/// Whether `public_key_hex` exactly matches a built-in trusted root in
/// canonical form (uppercase hex, no separators, no `0x` prefix).
/// The input is matched verbatim and never normalised.
pub fn is_trusted_hex(public_key_hex: &str) -> bool {
    builtin_registry().is_trusted_hex(public_key_hex)
}

/// Structured, fail-closed check against the built-in roots.
pub fn check_root_key(public_key: &[u8]) -> RootCheck {
    builtin_registry().check_bytes(public_key)
}

pub fn builtin_registry() -> &'static TrustedRootRegistry {
    TrustedRootRegistry::builtin()
}

// Re-exports for convenience
pub use crypto::encoding::canonical_hex;
pub use domain::error::{PinError, PinResult};
pub use domain::registry::TrustedRootRegistry;
pub use domain::types::{KeyEncoding, PinDefaults, RegistryConfig, TrustedPublicKey, TrustedRoot};
pub use domain::verdict::{RootCheck, Verdict};
