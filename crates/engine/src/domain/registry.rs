//! Trusted root registry: the membership test behind root pinning.
//!
//! A registry is an immutable map from canonical key hex to the named root it
//! belongs to. Queries never fail and never mutate; anything that is not an
//! exact match against a stored canonical key is untrusted.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, error, warn};

use crate::crypto::encoding::{canonical_hex, key_prefix};
use crate::domain::error::{PinError, PinResult};
use crate::domain::types::{RegistryConfig, TrustedPublicKey, TrustedRoot};
use crate::domain::verdict::{RootCheck, Verdict};

#[derive(Debug, Clone, Default)]
pub struct TrustedRootRegistry {
    by_key: HashMap<String, TrustedRoot>,
}

impl TrustedRootRegistry {
    /// The process-wide registry built from the static root table.
    pub fn builtin() -> &'static TrustedRootRegistry {
        &crate::roots::BUILTIN_REGISTRY
    }

    /// Build a registry from curated roots. Empty keys and duplicate keys are
    /// rejected.
    pub fn from_roots<I>(roots: I) -> PinResult<Self>
    where
        I: IntoIterator<Item = TrustedRoot>,
    {
        let mut by_key = HashMap::new();
        for root in roots {
            if root.key.is_empty() {
                return Err(PinError::EmptyKey);
            }
            match by_key.entry(root.key.as_hex().to_string()) {
                Entry::Occupied(e) => return Err(PinError::Duplicate(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(root);
                }
            }
        }
        Ok(Self { by_key })
    }

    /// Build a registry from configuration: optionally the built-in roots, plus
    /// any roots from the JSON bundle. A configuration that yields no roots is
    /// a `PinError::Config`.
    pub fn from_config(cfg: &RegistryConfig) -> PinResult<Self> {
        let mut roots: Vec<TrustedRoot> = if cfg.include_builtin {
            Self::builtin().roots().cloned().collect()
        } else {
            Vec::new()
        };
        if let Some(bundle) = &cfg.extra_roots_json {
            roots.extend(parse_root_bundle(bundle)?);
        }

        let registry = Self::from_roots(roots)?;
        if registry.is_empty() {
            warn!("trusted root registry built from configuration is empty");
            return Err(PinError::Config("no trusted roots configured".into()));
        }
        Ok(registry)
    }

    /// Build from a `(name, canonical hex)` table. Entries that break the
    /// canonical-hex invariant are logged and left out; on a duplicate key the
    /// first entry wins.
    pub(crate) fn from_table(table: &[(&str, &str)]) -> Self {
        let mut by_key = HashMap::with_capacity(table.len());
        for (name, hex) in table {
            match hex.parse::<TrustedPublicKey>() {
                Ok(key) => match by_key.entry(hex.to_string()) {
                    Entry::Occupied(_) => warn!(root = %name, "duplicate key in trusted root table"),
                    Entry::Vacant(e) => {
                        e.insert(TrustedRoot::new(*name, key));
                    }
                },
                Err(e) => error!(root = %name, error = %e, "skipping malformed trusted root entry"),
            }
        }
        Self { by_key }
    }

    /// Whether `public_key` (raw bytes) is one of the trusted roots.
    /// The bytes are canonicalized before lookup, so any byte input is valid.
    pub fn is_trusted_bytes(&self, public_key: &[u8]) -> bool {
        self.by_key.contains_key(&canonical_hex(public_key))
    }

    /// Whether `public_key_hex` is, verbatim, one of the stored canonical keys.
    ///
    /// The input is not normalised: lowercase, separated or `0x`-prefixed text
    /// does not match.
    pub fn is_trusted_hex(&self, public_key_hex: &str) -> bool {
        self.by_key.contains_key(public_key_hex)
    }

    pub fn contains(&self, key: &TrustedPublicKey) -> bool {
        self.is_trusted_hex(key.as_hex())
    }

    pub fn find_bytes(&self, public_key: &[u8]) -> Option<&TrustedRoot> {
        self.by_key.get(&canonical_hex(public_key))
    }

    pub fn find_hex(&self, public_key_hex: &str) -> Option<&TrustedRoot> {
        self.by_key.get(public_key_hex)
    }

    /// Fail-closed structured check of raw key bytes.
    pub fn check_bytes(&self, public_key: &[u8]) -> RootCheck {
        let key = TrustedPublicKey::from_bytes(public_key);
        match self.by_key.get(key.as_hex()) {
            Some(root) => RootCheck {
                verdict: Verdict::Allowed,
                root_name: Some(root.name.clone()),
                encoding: key.encoding(),
            },
            None => {
                debug!(
                    key_len = key.len(),
                    key_prefix = key_prefix(key.as_hex()),
                    "root public key is not pinned"
                );
                RootCheck {
                    verdict: Verdict::Rejected,
                    root_name: None,
                    encoding: key.encoding(),
                }
            }
        }
    }

    pub fn roots(&self) -> impl Iterator<Item = &TrustedRoot> {
        self.by_key.values()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(feature = "json")]
fn parse_root_bundle(bundle: &[u8]) -> PinResult<Vec<TrustedRoot>> {
    #[derive(serde::Deserialize)]
    struct RootBundle {
        roots: Vec<TrustedRoot>,
    }

    let parsed: RootBundle = serde_json::from_slice(bundle)?;
    Ok(parsed.roots)
}

#[cfg(not(feature = "json"))]
fn parse_root_bundle(_bundle: &[u8]) -> PinResult<Vec<TrustedRoot>> {
    Err(PinError::Feature("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(name: &str, hex: &str) -> TrustedRoot {
        TrustedRoot::new(name, hex.parse().unwrap())
    }

    #[test]
    fn from_roots_rejects_duplicates() {
        let err = TrustedRootRegistry::from_roots(vec![root("a", "04AA"), root("b", "04AA")]).unwrap_err();
        assert!(matches!(err, PinError::Duplicate(k) if k == "04AA"));
    }

    #[test]
    fn from_roots_rejects_empty_key() {
        let empty = TrustedRoot::new("empty", TrustedPublicKey::from_bytes(&[]));
        assert!(matches!(
            TrustedRootRegistry::from_roots(vec![empty]),
            Err(PinError::EmptyKey)
        ));
    }

    #[test]
    fn from_table_skips_malformed_entries() {
        let reg = TrustedRootRegistry::from_table(&[("ok", "04AB"), ("lower", "04ab"), ("odd", "04A")]);
        assert_eq!(reg.len(), 1);
        assert!(reg.is_trusted_hex("04AB"));
        assert!(!reg.is_trusted_hex("04ab"));
    }

    #[test]
    fn from_table_keeps_first_name_on_duplicate_key() {
        let reg = TrustedRootRegistry::from_table(&[("first", "04AB"), ("second", "04AB")]);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.find_hex("04AB").map(|r| r.name.as_str()), Some("first"));
    }

    #[test]
    fn empty_registry_trusts_nothing() {
        let reg = TrustedRootRegistry::default();
        assert!(reg.is_empty());
        assert!(!reg.is_trusted_bytes(&[]));
        assert!(!reg.is_trusted_hex(""));
        assert_eq!(reg.check_bytes(&[4, 1]).verdict, Verdict::Rejected);
    }

    #[test]
    fn check_reports_matched_root() {
        let reg = TrustedRootRegistry::from_roots(vec![root("Test EC Root", "04AABB")]).unwrap();
        let check = reg.check_bytes(&[0x04, 0xAA, 0xBB]);
        assert!(check.is_allowed());
        assert_eq!(check.root_name.as_deref(), Some("Test EC Root"));
        assert_eq!(reg.find_hex("04AABB").map(|r| r.name.as_str()), Some("Test EC Root"));
    }
}
