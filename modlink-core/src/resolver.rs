//! Eager resolver with soft-fail semantics
//!
//! "Load now, tell me if it's there": module resolution failures emit one
//! diagnostic line and yield `None` instead of an error, which suits
//! optional-plugin lookups. Attribute lookups on a module that did resolve
//! are a different story and fail hard with a typed error.

use crate::diagnostics::{stderr_sink, DiagnosticHandle};
use crate::error::LoadError;
use crate::module::Module;
use crate::path::ModulePath;
use crate::registry::SharedRegistry;
use crate::value::Value;
use modlink_config::ResolverConfig;
use std::sync::Arc;
use tracing::{debug, trace};

/// Eager module resolver over a shared registry
pub struct Resolver {
    registry: SharedRegistry,
    config: ResolverConfig,
    sink: DiagnosticHandle,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .finish()
    }
}

impl Resolver {
    /// Create a resolver with default configuration, reporting to stderr
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_config(registry, ResolverConfig::default())
    }

    /// Create a resolver with the given configuration
    pub fn with_config(registry: SharedRegistry, config: ResolverConfig) -> Self {
        Self {
            registry,
            config,
            sink: stderr_sink(),
        }
    }

    /// Route soft-fail diagnostics to a custom sink
    pub fn with_sink(mut self, sink: DiagnosticHandle) -> Self {
        self.sink = sink;
        self
    }

    /// Resolve a module by identifier, with an optional string prefix
    ///
    /// The prefix is prepended verbatim before lookup, so
    /// `resolve_module("json", Some("app.plugins."))` resolves
    /// `app.plugins.json`. On a miss this emits one diagnostic line and
    /// returns `None`; it never returns an error.
    pub fn resolve_module(&self, identifier: &str, prefix: Option<&str>) -> Option<Arc<Module>> {
        let full = ModulePath::join_prefix(identifier, prefix);
        self.lookup(&full)
    }

    /// Resolve a module by an already fully-qualified dotted path
    ///
    /// Same soft-fail contract as [`resolve_module`](Self::resolve_module);
    /// kept as a separate entry point to document that no prefix will ever
    /// be applied to the input.
    pub fn resolve_module_by_path(&self, path: &str) -> Option<Arc<Module>> {
        self.lookup(path)
    }

    /// Resolve a module and look up an attribute on it
    ///
    /// `Ok(None)` when the module itself soft-misses (the diagnostic has
    /// already been emitted; no attribute lookup is attempted). A missing
    /// attribute on a module that resolved is a hard error.
    pub fn get_attribute(
        &self,
        identifier: &str,
        attribute: &str,
        prefix: Option<&str>,
    ) -> Result<Option<Value>, LoadError> {
        let Some(module) = self.resolve_module(identifier, prefix) else {
            return Ok(None);
        };
        match module.attr(attribute) {
            Some(value) => {
                trace!(
                    target: "modlink::attribute",
                    module = module.name(),
                    attribute,
                    kind = value.type_name(),
                    "attribute resolved"
                );
                Ok(Some(value.clone()))
            }
            None => Err(LoadError::AttributeNotFound {
                attribute: attribute.to_string(),
                module: module.name().to_string(),
            }),
        }
    }

    /// Resolve a module and invoke one of its functions with no arguments
    ///
    /// `Ok(None)` when the module soft-misses. The invocation itself is
    /// always zero-argument; callers needing arguments go through a lazy
    /// handle instead.
    pub fn call_function(
        &self,
        identifier: &str,
        function: &str,
        prefix: Option<&str>,
    ) -> Result<Option<Value>, LoadError> {
        let Some(module) = self.resolve_module(identifier, prefix) else {
            return Ok(None);
        };
        invoke_attr(&module, function, &[]).map(Some)
    }

    fn lookup(&self, full: &str) -> Option<Arc<Module>> {
        let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
        match registry.get(full) {
            Some(module) => {
                trace!(target: "modlink::resolve", module = full, "module resolved");
                Some(module)
            }
            None => {
                debug!(target: "modlink::resolve", module = full, "module not registered");
                if self.config.diagnostics {
                    self.sink.emit(&format!(
                        "Module {full} could not be resolved. \
                         Make sure it is registered and available in the module registry."
                    ));
                }
                None
            }
        }
    }
}

/// Look up a callable attribute on a module and invoke it
///
/// Shared by the eager resolver and the lazy handle so both report
/// `NotCallable` and `CallFailed` identically.
pub(crate) fn invoke_attr(
    module: &Module,
    function: &str,
    args: &[Value],
) -> Result<Value, LoadError> {
    let value = module
        .attr(function)
        .ok_or_else(|| LoadError::AttributeNotFound {
            attribute: function.to_string(),
            module: module.name().to_string(),
        })?;
    let Value::Function(func) = value else {
        return Err(LoadError::NotCallable {
            attribute: function.to_string(),
            module: module.name().to_string(),
            found: value.type_name(),
        });
    };
    trace!(
        target: "modlink::invoke",
        module = module.name(),
        function,
        args = args.len(),
        "invoking native function"
    );
    func.invoke(args).map_err(|message| LoadError::CallFailed {
        function: function.to_string(),
        module: module.name().to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::registry::new_shared_registry;

    fn fixture_registry() -> SharedRegistry {
        let registry = new_shared_registry();
        {
            let mut reg = registry.write().unwrap();
            reg.register(
                Module::new("app.plugins.json")
                    .export("FORMAT", Value::Str("json".to_string())),
            )
            .unwrap();
        }
        registry
    }

    #[test]
    fn test_prefix_concatenation() {
        let resolver = Resolver::new(fixture_registry());

        let by_prefix = resolver.resolve_module("json", Some("app.plugins."));
        let direct = resolver.resolve_module("app.plugins.json", None);
        let by_path = resolver.resolve_module_by_path("app.plugins.json");

        let by_prefix = by_prefix.unwrap();
        assert!(Arc::ptr_eq(&by_prefix, &direct.unwrap()));
        assert!(Arc::ptr_eq(&by_prefix, &by_path.unwrap()));
    }

    #[test]
    fn test_soft_miss_emits_one_diagnostic() {
        let sink = Arc::new(MemorySink::new());
        let resolver = Resolver::new(fixture_registry()).with_sink(sink.clone());

        assert!(resolver.resolve_module("no.such.module", None).is_none());

        let lines = sink.drain();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("no.such.module"));
    }

    #[test]
    fn test_diagnostics_can_be_disabled() {
        let sink = Arc::new(MemorySink::new());
        let resolver = Resolver::with_config(
            fixture_registry(),
            ResolverConfig { diagnostics: false },
        )
        .with_sink(sink.clone());

        assert!(resolver.resolve_module("no.such.module", None).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_get_attribute_module_miss_is_soft() {
        let sink = Arc::new(MemorySink::new());
        let resolver = Resolver::new(fixture_registry()).with_sink(sink.clone());

        // Regression baseline: a missing module is Ok(None), not an error.
        let result = resolver.get_attribute("nonexistent_module", "x", None);
        assert!(matches!(result, Ok(None)));
        assert_eq!(sink.drain().len(), 1);
    }

    #[test]
    fn test_get_attribute_attr_miss_is_hard() {
        let resolver = Resolver::new(fixture_registry());

        let err = resolver
            .get_attribute("app.plugins.json", "missing", None)
            .unwrap_err();
        assert!(matches!(err, LoadError::AttributeNotFound { .. }));
        assert!(err.to_string().contains("missing"));
        assert!(err.to_string().contains("app.plugins.json"));
    }

    #[test]
    fn test_call_function_rejects_non_callable() {
        let resolver = Resolver::new(fixture_registry());

        let err = resolver
            .call_function("app.plugins.json", "FORMAT", None)
            .unwrap_err();
        assert!(matches!(err, LoadError::NotCallable { found: "string", .. }));
    }
}
