// Re-export all types so callers can use `domain::types::*`.

pub use key::*;
pub use config::*;

// Module declarations
mod key;
mod config;
