//! Filter configuration errors

use super::ResourceError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ResourceError {
    ResourceError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ResourceError {
    ResourceError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> ResourceError {
    ResourceError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
