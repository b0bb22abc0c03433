//! Module type: a named table of exported attributes

use crate::value::Value;
use std::collections::HashMap;

/// A loadable module: a dotted name plus a table of exported attributes
///
/// Module references handed out by the registry are `Arc<Module>`, so
/// resolving the same name twice yields equivalent handles to one module.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    description: Option<String>,
    exports: HashMap<String, Value>,
}

impl Module {
    /// Create an empty module with the given dotted name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            exports: HashMap::new(),
        }
    }

    /// Set a human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an exported attribute, builder style
    pub fn export(mut self, name: impl Into<String>, value: Value) -> Self {
        self.exports.insert(name.into(), value);
        self
    }

    /// Get the module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Look up an exported attribute by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.exports.get(name)
    }

    /// Check whether an attribute is exported
    pub fn has_attr(&self, name: &str) -> bool {
        self.exports.contains_key(name)
    }

    /// Get all exported attribute names
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(|s| s.as_str())
    }

    /// Get the number of exported attributes
    pub fn export_count(&self) -> usize {
        self.exports.len()
    }
}
