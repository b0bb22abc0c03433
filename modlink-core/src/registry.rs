//! Module registry
//!
//! The registry is the resolution mechanism modules are resolved against:
//! a map from full dotted name to a shared module handle. It stands in for
//! whatever search-path machinery the host application has.

use crate::error::LoadError;
use crate::module::Module;
use crate::path::ModulePath;
use modlink_config::RegistryConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry mapping dotted module names to shared module handles
#[derive(Default)]
pub struct ModuleRegistry {
    config: RegistryConfig,
    modules: HashMap<String, Arc<Module>>,
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("count", &self.modules.len())
            .finish()
    }
}

impl ModuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            modules: HashMap::new(),
        }
    }

    /// Register a module under its dotted name
    ///
    /// The name is validated as a module path. Replacing an existing entry
    /// is allowed unless the registry config forbids it.
    pub fn register(&mut self, module: Module) -> Result<(), LoadError> {
        let path = ModulePath::parse(module.name())?;
        let name = path.to_string();
        if !self.config.allow_replace && self.modules.contains_key(&name) {
            return Err(LoadError::AlreadyRegistered { module: name });
        }
        self.modules.insert(name, Arc::new(module));
        Ok(())
    }

    /// Get a module handle by full dotted name
    ///
    /// Repeated lookups return clones of the same `Arc`, so resolution is
    /// idempotent: equivalent references, never a re-built module.
    pub fn get(&self, name: &str) -> Option<Arc<Module>> {
        self.modules.get(name).cloned()
    }

    /// Check if a module is registered
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Remove a module, returning its handle
    pub fn remove(&mut self, name: &str) -> Option<Arc<Module>> {
        self.modules.remove(name)
    }

    /// Get all registered module names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(|s| s.as_str())
    }

    /// Get all registered modules
    pub fn all(&self) -> impl Iterator<Item = &Arc<Module>> {
        self.modules.values()
    }

    /// Get the number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Shared registry handle used by resolvers and lazy handles
pub type SharedRegistry = Arc<RwLock<ModuleRegistry>>;

/// Create a new shared, empty registry
pub fn new_shared_registry() -> SharedRegistry {
    Arc::new(RwLock::new(ModuleRegistry::new()))
}
