//! API layer configuration
//!
//! Holds the loader run configuration and a global singleton for CLI use.

use modlink_config::{RegistryConfig, ResolverConfig};
use once_cell::sync::OnceCell;

/// Loader run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Eager resolver behavior
    pub resolver: ResolverConfig,
    /// Registry behavior
    pub registry: RegistryConfig,
    /// Whether the global registry starts with the builtin modules
    pub install_builtins: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            registry: RegistryConfig::default(),
            install_builtins: true,
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference, falling back to defaults when uninitialized
pub fn config() -> RunConfig {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
