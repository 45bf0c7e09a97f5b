//! Resource locator errors

use super::ResourceError;

/// Creates an invalid URI error
pub fn invalid(uri: impl Into<String>, reason: impl Into<String>) -> ResourceError {
    ResourceError::InvalidUri {
        uri: uri.into(),
        reason: reason.into(),
    }
}
