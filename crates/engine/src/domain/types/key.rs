use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::encoding::{canonical_hex, validate_canonical_hex};
use crate::domain::error::PinError;

/// Public key of a root certificate: the contents of the `subjectPublicKey`
/// BIT STRING in its DER `SubjectPublicKeyInfo`.
///
/// Bytes are opaque to the registry. Matching is equality of the canonical hex
/// form, regardless of key algorithm.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrustedPublicKey {
    bytes: Vec<u8>,
    canonical: String,
}

/// Encoding family recognised from a key's leading bytes. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyEncoding {
    /// DER `RSAPublicKey` SEQUENCE.
    Rsa,
    /// Uncompressed SEC1 elliptic-curve point.
    EcPoint,
    Unknown,
}

impl TrustedPublicKey {
    /// Wrap raw key bytes. Any byte sequence is accepted, including an empty one.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            canonical: canonical_hex(bytes),
        }
    }

    /// Canonical uppercase hex form.
    pub fn as_hex(&self) -> &str {
        &self.canonical
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn encoding(&self) -> KeyEncoding {
        match self.bytes.as_slice() {
            [0x30, 0x82, ..] | [0x30, 0x81, ..] => KeyEncoding::Rsa,
            [0x04, rest @ ..] if !rest.is_empty() && rest.len() % 2 == 0 => KeyEncoding::EcPoint,
            _ => KeyEncoding::Unknown,
        }
    }
}

impl FromStr for TrustedPublicKey {
    type Err = PinError;

    /// Parse a key that is already in canonical form. No normalisation is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = validate_canonical_hex(s)?;
        Ok(Self {
            bytes,
            canonical: s.to_string(),
        })
    }
}

impl fmt::Display for TrustedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl fmt::Debug for TrustedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrustedPublicKey").field(&self.canonical).finish()
    }
}

impl Serialize for TrustedPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for TrustedPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named member of a trusted root set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedRoot {
    /// Display name of the issuing certificate authority.
    pub name: String,
    pub key: TrustedPublicKey,
}

impl TrustedRoot {
    pub fn new(name: impl Into<String>, key: TrustedPublicKey) -> Self {
        Self { name: name.into(), key }
    }
}
