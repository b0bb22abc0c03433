//! Modlink API - Unified loading interface
//!
//! Provides the loading surface host applications consume:
//! - a process-wide module registry (builtins installed per configuration)
//! - eager resolution with soft-fail semantics
//! - lazy handles with hard-fail semantics
//! - unified error handling ([`ModlinkError`])
//!
//! For CLI convenience, this crate provides a global singleton registry and
//! config. For library use, prefer an explicit
//! [`Resolver`](modlink_core::Resolver) over your own registry.

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from modlink_config
pub use modlink_config::{RegistryConfig, ResolverConfig, Stage};

// Re-export error types
pub mod error;
pub use error::{LoadError, ModlinkError, PathError};

// Re-export core types
pub use modlink_config;
pub use modlink_core::{
    builtins, new_shared_registry, LazyHandle, Module, ModulePath, ModuleRegistry, Resolver,
    SharedRegistry, Value,
};

// Global registry: built on first use, honoring the global config if it was
// initialized by then.
static GLOBAL_REGISTRY: Lazy<SharedRegistry> = Lazy::new(|| {
    let cfg = config::config();
    let mut registry = ModuleRegistry::with_config(cfg.registry.clone());
    if cfg.install_builtins {
        builtins::install(&mut registry);
        debug!(target: "modlink::resolve", "builtin modules installed");
    }
    Arc::new(std::sync::RwLock::new(registry))
});

/// Get the process-wide shared registry
pub fn registry() -> SharedRegistry {
    GLOBAL_REGISTRY.clone()
}

/// Register a module in the global registry
pub fn register_module(module: Module) -> Result<(), ModlinkError> {
    let registry = registry();
    let mut reg = registry.write().unwrap_or_else(|e| e.into_inner());
    reg.register(module)?;
    Ok(())
}

fn global_resolver() -> Resolver {
    Resolver::with_config(registry(), config::config().resolver)
}

/// Eagerly resolve a module by identifier and optional prefix (soft-fail)
pub fn resolve_module(identifier: &str, prefix: Option<&str>) -> Option<Arc<Module>> {
    global_resolver().resolve_module(identifier, prefix)
}

/// Eagerly resolve a module by fully-qualified dotted path (soft-fail)
pub fn resolve_module_by_path(path: &str) -> Option<Arc<Module>> {
    global_resolver().resolve_module_by_path(path)
}

/// Resolve a module and look up an attribute
///
/// `Ok(None)` when the module soft-misses; hard error when the attribute is
/// missing on a resolved module.
pub fn get_attribute(
    identifier: &str,
    attribute: &str,
    prefix: Option<&str>,
) -> Result<Option<Value>, ModlinkError> {
    global_resolver()
        .get_attribute(identifier, attribute, prefix)
        .map_err(ModlinkError::from)
}

/// Resolve a module and invoke one of its functions with no arguments
pub fn call_function(
    identifier: &str,
    function: &str,
    prefix: Option<&str>,
) -> Result<Option<Value>, ModlinkError> {
    global_resolver()
        .call_function(identifier, function, prefix)
        .map_err(ModlinkError::from)
}

/// Create a lazy handle over the global registry
///
/// No resolution work happens until the handle is first used.
pub fn lazy(identifier: impl Into<String>) -> LazyHandle {
    LazyHandle::new(registry(), identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_fn(_args: &[Value]) -> Result<Value, String> {
        Ok(Value::Bool(true))
    }

    #[test]
    fn test_builtins_available_on_global_registry() {
        let math = resolve_module("std.math", None).expect("builtins installed");
        assert!(math.has_attr("sqrt"));
    }

    #[test]
    fn test_register_and_resolve_roundtrip() {
        register_module(
            Module::new("api.fixture")
                .export("ready", Value::function("ready", 0, ok_fn)),
        )
        .unwrap();

        let value = call_function("api.fixture", "ready", None).unwrap().unwrap();
        assert_eq!(value, Value::Bool(true));
    }

    #[test]
    fn test_lazy_over_global_registry() {
        register_module(Module::new("api.lazy_fixture").export("n", Value::Int(1))).unwrap();

        let handle = lazy("api.lazy_fixture");
        assert!(!handle.is_resolved());
        assert_eq!(handle.resolve_attribute("n").unwrap(), Value::Int(1));
    }

    #[test]
    fn test_register_invalid_name_is_error() {
        let err = register_module(Module::new("bad/name")).unwrap_err();
        assert_eq!(err.stage(), "path");
    }
}
