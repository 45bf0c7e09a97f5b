//! Error types and handling for resource access
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: missing content, directories, native-file conversion
//! - [`uri`]: malformed resource locators
//! - [`config`]: filter configuration files and glob patterns

pub mod config;
pub mod fs;
pub mod uri;

pub use config::{
    invalid_pattern, parse_failed as config_parse_failed, read_failed as config_read_failed,
};
pub use fs::{is_directory, no_relative, not_found, not_resolvable};
pub use uri::invalid as invalid_uri;

use miette::Diagnostic;
use thiserror::Error;

/// Distinguishes the ways a resource can be "not found"
///
/// Callers branch on this instead of parsing messages or re-probing the
/// underlying store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    /// Nothing exists at the location.
    Missing,
    /// The location exists but is a directory, not content.
    IsDirectory,
    /// The provider cannot map the location to the requested form
    /// (native file, URI).
    NotResolvable,
    /// The resource kind cannot derive relative resources.
    NoRelative,
}

/// Main error type for resource operations
#[derive(Error, Diagnostic, Debug)]
pub enum ResourceError {
    // Not-found family
    #[error("{path} (No such file or directory)")]
    #[diagnostic(code(resio::fs::not_found))]
    NotFound { path: String },

    #[error("{path} (Is a directory)")]
    #[diagnostic(
        code(resio::fs::is_directory),
        help("Point the resource at a file inside the directory instead")
    )]
    IsDirectory { path: String },

    #[error("{description} cannot be resolved to {target}")]
    #[diagnostic(code(resio::fs::not_resolvable))]
    NotResolvable {
        description: String,
        target: &'static str,
    },

    #[error("Cannot create a relative resource for {description}")]
    #[diagnostic(code(resio::fs::no_relative))]
    NoRelative { description: String },

    // Locator errors
    #[error("Invalid resource URI '{uri}': {reason}")]
    #[diagnostic(
        code(resio::uri::invalid),
        help("Use an absolute file URI such as file:///tmp/data.txt")
    )]
    InvalidUri { uri: String, reason: String },

    // Filter errors
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(resio::filter::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to parse filter configuration: {path}")]
    #[diagnostic(code(resio::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read filter configuration: {path}")]
    #[diagnostic(code(resio::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Provider failures pass through untouched
    #[error("{0}")]
    #[diagnostic(code(resio::fs::io_error))]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// Which not-found case this is, if any
    pub fn not_found_kind(&self) -> Option<NotFoundKind> {
        match self {
            ResourceError::NotFound { .. } => Some(NotFoundKind::Missing),
            ResourceError::IsDirectory { .. } => Some(NotFoundKind::IsDirectory),
            ResourceError::NotResolvable { .. } => Some(NotFoundKind::NotResolvable),
            ResourceError::NoRelative { .. } => Some(NotFoundKind::NoRelative),
            _ => None,
        }
    }

    /// True for every not-found case, regardless of kind
    pub fn is_not_found(&self) -> bool {
        self.not_found_kind().is_some()
    }
}

impl From<serde_yaml::Error> for ResourceError {
    fn from(err: serde_yaml::Error) -> Self {
        ResourceError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ResourceError>;
