//! Canonical key encoding shared by the registry and its callers.
//!
//! A key's canonical form is the uppercase hex of its bytes with no separators
//! and no `0x` prefix. Queries only ever encode; decoding with validation is
//! reserved for building registries from curated data.

use crate::domain::error::{PinError, PinResult};

/// Encode raw key bytes into the canonical form used as the registry key.
pub fn canonical_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Validate that `s` is already in canonical form and return the decoded bytes.
pub fn validate_canonical_hex(s: &str) -> PinResult<Vec<u8>> {
    if s.is_empty() {
        return Err(PinError::EmptyKey);
    }
    for (offset, ch) in s.char_indices() {
        match ch {
            '0'..='9' | 'A'..='F' => {}
            'a'..='f' | 'x' | 'X' | ':' | ' ' => return Err(PinError::NotCanonical),
            _ => return Err(PinError::InvalidHex { ch, offset }),
        }
    }
    if s.len() % 2 != 0 {
        return Err(PinError::OddLength(s.len()));
    }
    hex::decode(s).map_err(|_| PinError::NotCanonical)
}

/// Short, log-safe prefix of a canonical key.
pub(crate) fn key_prefix(canonical: &str) -> &str {
    let end = canonical.len().min(16);
    // canonical hex is ASCII
    &canonical[..end]
}
