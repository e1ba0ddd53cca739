/// Centralized defaults for registry construction.
pub struct PinDefaults;

impl PinDefaults {
    pub const INCLUDE_BUILTIN_ROOTS: bool = true; // Built-in pins stay active unless explicitly dropped
    pub const HAS_EXTRA_ROOTS: Option<Vec<u8>> = None; // Bring-your-own-roots is opt-in
}

/// Configuration for building a custom registry, using raw bytes to avoid I/O
/// in the engine.
///
/// `extra_roots_json` holds a curated bundle of the form
/// `{"roots":[{"name":"...","key":"<canonical hex>"}]}`.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub include_builtin: bool,
    pub extra_roots_json: Option<Vec<u8>>,
}

impl RegistryConfig {
    /// Secure opinionated defaults: built-in roots only.
    pub fn secure_default() -> Self {
        Self {
            include_builtin: PinDefaults::INCLUDE_BUILTIN_ROOTS,
            extra_roots_json: PinDefaults::HAS_EXTRA_ROOTS,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::secure_default()
    }
}
