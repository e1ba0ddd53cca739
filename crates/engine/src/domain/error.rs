// crates/engine/src/domain/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinError {
  #[error("configuration: {0}")]
  Config(String),

  #[error("empty public key")]
  EmptyKey,

  #[error("odd-length hex key ({0} characters)")]
  OddLength(usize),

  #[error("invalid hex character {ch:?} at offset {offset}")]
  InvalidHex { ch: char, offset: usize },

  #[error("non-canonical hex key: expected uppercase without separators or prefix")]
  NotCanonical,

  #[error("duplicate trusted root key: {0}")]
  Duplicate(String),

  #[cfg(feature = "json")]
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("feature not enabled: {0}")]
  Feature(&'static str),
}

pub type PinResult<T> = Result<T, PinError>;
