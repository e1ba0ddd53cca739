#![allow(dead_code)]

use que_pin as qp;
use rcgen::{KeyPair, PKCS_ECDSA_P256_SHA256};

/// Canonical hex of a built-in root, looked up by name.
pub fn builtin_root_hex(name: &str) -> &'static str {
    qp::roots::BUILTIN_ROOTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or_else(|| panic!("no built-in root named {name}"))
}

pub fn digicert_global_root_ca_hex() -> &'static str {
    builtin_root_hex("DigiCert Global Root CA")
}

pub fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test hex")
}

/// Raw uncompressed P-256 point of a freshly generated key (never pinned).
pub fn generate_p256_public_key() -> Vec<u8> {
    let key = KeyPair::generate(&PKCS_ECDSA_P256_SHA256).expect("keypair");
    key.public_key_raw().to_vec()
}

/// (raw point, full SubjectPublicKeyInfo DER) of a freshly generated P-256 key.
pub fn generate_p256_key_forms() -> (Vec<u8>, Vec<u8>) {
    let key = KeyPair::generate(&PKCS_ECDSA_P256_SHA256).expect("keypair");
    (key.public_key_raw().to_vec(), key.public_key_der())
}

/// JSON root bundle accepted by `RegistryConfig::extra_roots_json`.
pub fn root_bundle(roots: &[(&str, &str)]) -> Vec<u8> {
    let roots: Vec<_> = roots
        .iter()
        .map(|(name, key)| serde_json::json!({ "name": name, "key": key }))
        .collect();
    serde_json::json!({ "roots": roots }).to_string().into_bytes()
}
