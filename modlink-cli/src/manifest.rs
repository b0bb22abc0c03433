//! Module manifest loading
//!
//! A manifest is a JSON file declaring constant modules to register before
//! a command runs:
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "name": "app.settings",
//!       "description": "Application settings",
//!       "exports": { "debug": true, "retries": 3 }
//!     }
//!   ]
//! }
//! ```
//!
//! Exports are scalars only; native functions cannot be declared in data.

use modlink_api::{Module, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Manifest file structure
#[derive(Debug, serde::Deserialize)]
pub struct Manifest {
    /// Modules to register
    pub modules: Vec<ManifestModule>,
}

/// One module declaration
#[derive(Debug, serde::Deserialize)]
pub struct ManifestModule {
    /// Full dotted module name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Exported attributes (scalar JSON values)
    #[serde(default)]
    pub exports: BTreeMap<String, serde_json::Value>,
}

/// Check that the given path names an existing regular file
pub fn is_valid_path(path: &Path) -> bool {
    path.is_file()
}

/// Read and parse a manifest file
pub fn read_manifest(path: &Path) -> Result<Manifest, String> {
    if !is_valid_path(path) {
        return Err(format!(
            "manifest '{}' not found or not a file",
            path.display()
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;

    serde_json::from_str(&content).map_err(|e| format!("cannot parse '{}': {}", path.display(), e))
}

impl ManifestModule {
    /// Convert the declaration into a registrable module
    pub fn to_module(&self) -> Result<Module, String> {
        let mut module = Module::new(&self.name);
        if let Some(description) = &self.description {
            module = module.with_description(description);
        }
        for (name, raw) in &self.exports {
            let value = scalar_value(raw).ok_or_else(|| {
                format!(
                    "export '{}' of module '{}' is not a scalar (arrays and objects are not supported)",
                    name, self.name
                )
            })?;
            module = module.export(name, value);
        }
        Ok(module)
    }
}

/// Map a scalar JSON value to an attribute value
fn scalar_value(raw: &serde_json::Value) -> Option<Value> {
    match raw {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::Int(i))
            } else {
                n.as_f64().map(Value::Float)
            }
        }
        serde_json::Value::String(s) => Some(Value::Str(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}
