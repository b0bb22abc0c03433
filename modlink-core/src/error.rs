//! Error types for the loader core

use thiserror::Error;

/// Error type for module path parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty module path")]
    EmptyPath,

    #[error("invalid module path: {0}")]
    InvalidPath(String),

    #[error("empty segment in path: {0}")]
    EmptySegment(String),
}

/// Error type for module and attribute resolution
///
/// These are the hard-fail errors: the lazy handle raises them for every
/// failure, the eager resolver only for attribute-level failures on a
/// module that did resolve.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("cannot find module '{module}' in the registry")]
    ModuleNotFound { module: String },

    #[error("cannot load '{attribute}' from module '{module}'")]
    AttributeNotFound { attribute: String, module: String },

    #[error("attribute '{attribute}' of module '{module}' is not callable (found {found})")]
    NotCallable {
        attribute: String,
        module: String,
        found: &'static str,
    },

    #[error("call to '{function}' in module '{module}' failed: {message}")]
    CallFailed {
        function: String,
        module: String,
        message: String,
    },

    #[error("module '{module}' is already registered")]
    AlreadyRegistered { module: String },

    #[error("module path error: {0}")]
    Path(#[from] PathError),
}

impl LoadError {
    /// Get the module name this error refers to, if any
    pub fn module(&self) -> Option<&str> {
        match self {
            LoadError::ModuleNotFound { module }
            | LoadError::AttributeNotFound { module, .. }
            | LoadError::NotCallable { module, .. }
            | LoadError::CallFailed { module, .. }
            | LoadError::AlreadyRegistered { module } => Some(module),
            LoadError::Path(_) => None,
        }
    }
}
