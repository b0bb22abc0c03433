//! Modlink Core
//!
//! Module registry, eager resolution and lazy handles.
//!
//! A [`ModuleRegistry`] maps dotted identifiers to modules exposing named
//! attributes. Two resolution styles sit on top of it:
//!
//! - [`Resolver`] resolves eagerly and soft-fails: a missing module emits
//!   one diagnostic line and yields `None`.
//! - [`LazyHandle`] defers resolution until first use, resolves at most
//!   once, and hard-fails with typed [`LoadError`]s.

pub mod builtins;
pub mod diagnostics;
pub mod error;
pub mod lazy;
pub mod module;
pub mod path;
pub mod registry;
pub mod resolver;
pub mod value;

pub use diagnostics::{DiagnosticHandle, DiagnosticSink, MemorySink, StderrSink};
pub use error::{LoadError, PathError};
pub use lazy::LazyHandle;
pub use module::Module;
pub use path::ModulePath;
pub use registry::{new_shared_registry, ModuleRegistry, SharedRegistry};
pub use resolver::Resolver;
pub use value::{NativeFn, NativeFunction, Value};

// Re-export the config vocabulary used in public signatures
pub use modlink_config::{RegistryConfig, ResolverConfig, Stage};
