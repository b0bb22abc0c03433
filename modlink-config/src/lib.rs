//! Modlink Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Modlink crates.

/// Configuration for eager resolution behavior
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Whether soft resolution failures emit a diagnostic line
    pub diagnostics: bool,
}

/// Configuration for registry behavior
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Whether registering an already-registered name replaces the entry
    pub allow_replace: bool,
}

/// Loader stage enum for stage-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Path,
    Resolve,
    Attribute,
    Invoke,
}

impl Stage {
    /// Get the string name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Path => "path",
            Stage::Resolve => "resolve",
            Stage::Attribute => "attribute",
            Stage::Invoke => "invoke",
        }
    }

    /// Get the log target name for this stage
    pub fn target(&self) -> String {
        format!("modlink::{}", self.as_str())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { diagnostics: true }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_replace: true,
        }
    }
}
