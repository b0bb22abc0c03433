//! CLI configuration
//!
//! Log configuration with a global level and per-stage overrides.

use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub path: Option<Level>,
    pub resolve: Option<Level>,
    pub attribute: Option<Level>,
    pub invoke: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            path: None,
            resolve: None,
            attribute: None,
            invoke: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "modlink::path" => self.path.unwrap_or(self.global),
            "modlink::resolve" => self.resolve.unwrap_or(self.global),
            "modlink::attribute" => self.attribute.unwrap_or(self.global),
            "modlink::invoke" => self.invoke.unwrap_or(self.global),
            _ => self.global,
        }
    }
}
