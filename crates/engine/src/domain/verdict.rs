// crates/engine/src/domain/verdict.rs
use serde::Serialize;

use crate::domain::types::KeyEncoding;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Rejected,
}

/// Outcome of checking a root public key against a registry.
/// Anything other than an exact match is `Rejected`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RootCheck {
    pub verdict: Verdict,

    /// Name of the matched trusted root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_name: Option<String>,

    /// Encoding family of the presented key.
    pub encoding: KeyEncoding,
}

impl RootCheck {
    pub fn is_allowed(&self) -> bool {
        self.verdict == Verdict::Allowed
    }
}
