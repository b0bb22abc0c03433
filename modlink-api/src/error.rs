//! API error types
//!
//! A single error type wrapping the core errors, so callers match on one
//! enum regardless of which stage failed.

use thiserror::Error;

pub use modlink_core::{LoadError, PathError};

/// Modlink error type
#[derive(Error, Debug, Clone)]
pub enum ModlinkError {
    /// Module path parsing error
    #[error("{0}")]
    Path(#[from] PathError),

    /// Module or attribute resolution error
    #[error("{0}")]
    Load(#[from] LoadError),

    /// Registry-level error
    #[error("registry error: {0}")]
    Registry(String),
}

impl ModlinkError {
    /// Get the stage name where the error occurred
    pub fn stage(&self) -> &'static str {
        match self {
            ModlinkError::Path(_) => "path",
            ModlinkError::Load(e) => match e {
                LoadError::ModuleNotFound { .. } => "resolve",
                LoadError::AttributeNotFound { .. } | LoadError::NotCallable { .. } => "attribute",
                LoadError::CallFailed { .. } => "invoke",
                LoadError::AlreadyRegistered { .. } => "registry",
                LoadError::Path(_) => "path",
            },
            ModlinkError::Registry(_) => "registry",
        }
    }

    /// Get the module name the error refers to, if any
    pub fn module(&self) -> Option<&str> {
        match self {
            ModlinkError::Load(e) => e.module(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_mapping() {
        let err: ModlinkError = PathError::EmptyPath.into();
        assert_eq!(err.stage(), "path");

        let err: ModlinkError = LoadError::ModuleNotFound {
            module: "m".to_string(),
        }
        .into();
        assert_eq!(err.stage(), "resolve");
        assert_eq!(err.module(), Some("m"));

        let err: ModlinkError = LoadError::CallFailed {
            function: "f".to_string(),
            module: "m".to_string(),
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.stage(), "invoke");
    }
}
