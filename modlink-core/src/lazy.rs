//! Lazy module handle with hard-fail semantics
//!
//! A handle is constructed from an identifier without touching the registry.
//! The first attribute access or call resolves the module and stores the
//! reference; the slot transitions at most once and is never reset, so the
//! handle keeps working even if the registry entry is later removed.

use crate::error::LoadError;
use crate::module::Module;
use crate::path::ModulePath;
use crate::registry::SharedRegistry;
use crate::resolver::invoke_attr;
use crate::value::Value;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// Deferred module handle
///
/// Unlike the eager resolver, every failure here is a typed error: callers
/// of a lazy handle presume the module must exist.
pub struct LazyHandle {
    identifier: String,
    registry: SharedRegistry,
    module: OnceCell<Arc<Module>>,
}

impl std::fmt::Debug for LazyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyHandle")
            .field("identifier", &self.identifier)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl LazyHandle {
    /// Create a handle; performs no resolution work
    pub fn new(registry: SharedRegistry, identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            registry,
            module: OnceCell::new(),
        }
    }

    /// Get the identifier this handle was constructed with
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Check whether the module has been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.module.get().is_some()
    }

    /// Resolve an exported attribute, loading the module on first use
    pub fn resolve_attribute(&self, name: &str) -> Result<Value, LoadError> {
        let module = self.module()?;
        module
            .attr(name)
            .cloned()
            .ok_or_else(|| LoadError::AttributeNotFound {
                attribute: name.to_string(),
                module: self.identifier.clone(),
            })
    }

    /// Invoke the function named by the last dot-separated segment of the
    /// identifier
    ///
    /// A handle for `pkg.sub.foo` calls the attribute literally named `foo`.
    /// This is the original convention; prefer
    /// [`call_named`](Self::call_named) when the function name does not
    /// mirror the identifier tail.
    pub fn call(&self, args: &[Value]) -> Result<Value, LoadError> {
        let function = ModulePath::tail(&self.identifier).to_string();
        self.call_named(&function, args)
    }

    /// Invoke an explicitly named exported function
    pub fn call_named(&self, name: &str, args: &[Value]) -> Result<Value, LoadError> {
        let module = self.module()?;
        invoke_attr(module, name, args)
    }

    fn module(&self) -> Result<&Arc<Module>, LoadError> {
        self.module.get_or_try_init(|| {
            debug!(
                target: "modlink::resolve",
                module = self.identifier.as_str(),
                "lazy handle resolving"
            );
            let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
            registry
                .get(&self.identifier)
                .ok_or_else(|| LoadError::ModuleNotFound {
                    module: self.identifier.clone(),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::new_shared_registry;

    fn greet_fn(_args: &[Value]) -> Result<Value, String> {
        Ok(Value::Str("hello".to_string()))
    }

    fn registry_with_greeter() -> SharedRegistry {
        let registry = new_shared_registry();
        registry
            .write()
            .unwrap()
            .register(Module::new("app.greet").export("greet", Value::function("greet", 0, greet_fn)))
            .unwrap();
        registry
    }

    #[test]
    fn test_construction_does_no_work() {
        let registry = new_shared_registry();
        let handle = LazyHandle::new(registry, "definitely.not.registered");
        assert!(!handle.is_resolved());
        assert_eq!(handle.identifier(), "definitely.not.registered");
    }

    #[test]
    fn test_tail_call_convention() {
        let handle = LazyHandle::new(registry_with_greeter(), "app.greet");
        let value = handle.call(&[]).unwrap();
        assert_eq!(value, Value::Str("hello".to_string()));
        assert!(handle.is_resolved());
    }

    #[test]
    fn test_missing_module_is_hard_error() {
        let registry = new_shared_registry();
        let handle = LazyHandle::new(registry, "no.such.module");

        let err = handle.resolve_attribute("anything").unwrap_err();
        assert!(matches!(err, LoadError::ModuleNotFound { .. }));
        assert!(err.to_string().contains("no.such.module"));
        assert!(!handle.is_resolved());
    }
}
