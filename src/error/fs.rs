//! File system errors

use super::ResourceError;

/// Creates a missing-content error
pub fn not_found(path: impl Into<String>) -> ResourceError {
    ResourceError::NotFound { path: path.into() }
}

/// Creates a location-is-a-directory error
pub fn is_directory(path: impl Into<String>) -> ResourceError {
    ResourceError::IsDirectory { path: path.into() }
}

/// Creates an error for a location the provider cannot map to `target`
pub fn not_resolvable(description: impl Into<String>, target: &'static str) -> ResourceError {
    ResourceError::NotResolvable {
        description: description.into(),
        target,
    }
}

/// Creates an error for resource kinds without relative resolution
pub fn no_relative(description: impl Into<String>) -> ResourceError {
    ResourceError::NoRelative {
        description: description.into(),
    }
}
