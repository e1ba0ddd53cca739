use std::sync::Arc;

use que_pin::domain::error::PinError;
use que_pin::{KeyEncoding, RegistryConfig, RootCheck, TrustedRootRegistry, Verdict};

uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{message}")]
    Generic { message: String },
}

impl From<PinError> for FfiError {
    fn from(e: PinError) -> Self {
        FfiError::Generic {
            message: e.to_string(),
        }
    }
}

// ===== FFI types mirroring the public Rust API (FFI-friendly) =====

#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiVerdict { Allowed, Rejected }

impl From<Verdict> for FfiVerdict {
    fn from(v: Verdict) -> Self {
        match v { Verdict::Allowed => FfiVerdict::Allowed, Verdict::Rejected => FfiVerdict::Rejected }
    }
}

#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiKeyEncoding { Rsa, EcPoint, Unknown }

impl From<KeyEncoding> for FfiKeyEncoding {
    fn from(v: KeyEncoding) -> Self {
        match v { KeyEncoding::Rsa => FfiKeyEncoding::Rsa, KeyEncoding::EcPoint => FfiKeyEncoding::EcPoint, KeyEncoding::Unknown => FfiKeyEncoding::Unknown }
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiRootCheck {
    pub verdict: FfiVerdict,
    pub root_name: Option<String>,
    pub encoding: FfiKeyEncoding,
}

impl From<RootCheck> for FfiRootCheck {
    fn from(v: RootCheck) -> Self {
        FfiRootCheck { verdict: v.verdict.into(), root_name: v.root_name, encoding: v.encoding.into() }
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiTrustedRoot {
    pub name: String,
    /// Canonical uppercase hex of the root's public key.
    pub key_hex: String,
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiRegistryConfig {
    pub include_builtin: bool,
    pub extra_roots_json: Option<Vec<u8>>, // {"roots":[{"name":..,"key":..}]}
}

impl From<FfiRegistryConfig> for RegistryConfig {
    fn from(v: FfiRegistryConfig) -> Self {
        RegistryConfig { include_builtin: v.include_builtin, extra_roots_json: v.extra_roots_json }
    }
}

// ===== Built-in registry, mirroring the Rust surface =====

#[uniffi::export]
pub fn is_trusted_root_key(key: Vec<u8>) -> bool {
    que_pin::is_trusted_bytes(&key)
}

#[uniffi::export]
pub fn is_trusted_root_key_hex(key_hex: String) -> bool {
    que_pin::is_trusted_hex(&key_hex)
}

#[uniffi::export]
pub fn check_root_key(key: Vec<u8>) -> FfiRootCheck {
    que_pin::check_root_key(&key).into()
}

#[uniffi::export]
pub fn builtin_trusted_roots() -> Vec<FfiTrustedRoot> {
    let mut roots: Vec<FfiTrustedRoot> = que_pin::builtin_registry()
        .roots()
        .map(|r| FfiTrustedRoot { name: r.name.clone(), key_hex: r.key.as_hex().to_string() })
        .collect();
    roots.sort_by(|a, b| a.name.cmp(&b.name));
    roots
}

// ===== Caller-configured registry =====

#[derive(uniffi::Object, Debug)]
pub struct FfiTrustedRootRegistry {
    inner: TrustedRootRegistry,
}

#[uniffi::export]
impl FfiTrustedRootRegistry {
    #[uniffi::constructor]
    pub fn new(cfg: FfiRegistryConfig) -> Result<Arc<Self>, FfiError> {
        let cfg: RegistryConfig = cfg.into();
        let inner = TrustedRootRegistry::from_config(&cfg)?;
        Ok(Arc::new(Self { inner }))
    }

    pub fn is_trusted(&self, key: Vec<u8>) -> bool {
        self.inner.is_trusted_bytes(&key)
    }

    pub fn is_trusted_hex(&self, key_hex: String) -> bool {
        self.inner.is_trusted_hex(&key_hex)
    }

    pub fn check(&self, key: Vec<u8>) -> FfiRootCheck {
        self.inner.check_bytes(&key).into()
    }

    pub fn len(&self) -> u64 {
        self.inner.len() as u64
    }
}
