// Built-in root pins and the process-wide registry built from them.

mod table;

pub use table::BUILTIN_ROOTS;

use once_cell::sync::Lazy;

use crate::domain::registry::TrustedRootRegistry;

pub(crate) static BUILTIN_REGISTRY: Lazy<TrustedRootRegistry> = Lazy::new(|| {
    let registry = TrustedRootRegistry::from_table(BUILTIN_ROOTS);
    tracing::debug!(roots = registry.len(), "built-in trusted root registry initialised");
    registry
});
