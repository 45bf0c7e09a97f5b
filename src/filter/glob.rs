//! Glob matching for path filters

use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use super::Matcher;
use crate::error::{Result, invalid_pattern};
use crate::path_utils;

/// Treats each filter candidate as a glob over forward-slash paths.
///
/// `**/*.md` matches `docs/guide/intro.md`; `target/**` matches everything
/// below `target/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobMatcher;

impl GlobMatcher {
    /// Check that `pattern` compiles as a glob.
    pub fn validate(pattern: &str) -> Result<()> {
        Glob::new(pattern)
            .map(|_| ())
            .map_err(|err| invalid_pattern(pattern, err.to_string()))
    }
}

impl Matcher<String> for GlobMatcher {
    fn matches(&self, instance: &String, candidate: &String) -> bool {
        matches_glob(candidate, instance)
    }
}

/// Check if a glob pattern matches a file path
///
/// Paths are normalized to forward slashes for consistent matching across
/// platforms. A pattern that does not compile only matches itself.
pub fn matches_glob(pattern: &str, file_path: &str) -> bool {
    let normalized_path = path_utils::to_forward_slashes(Path::new(file_path));
    let candidate = CandidatePath::from(normalized_path.as_str());

    if let Ok(glob) = Glob::new(pattern) {
        glob.matched(&candidate).is_some()
    } else {
        pattern == normalized_path
    }
}
