//! Filter configuration files
//!
//! ```yaml
//! includes:
//!   - "src/**"
//! excludes:
//!   - "**/*.bak"
//! match_if_empty: true
//! ```
//!
//! Every field is optional. Missing lists are empty and `match_if_empty`
//! defaults to `true`, so an empty file selects everything.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GlobMatcher, InstanceFilter};
use crate::error::{Result, config_parse_failed, config_read_failed};

/// Include/exclude glob lists as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Globs a path must match (when non-empty)
    pub includes: Vec<String>,

    /// Globs that reject a path
    pub excludes: Vec<String>,

    /// Result when both lists are empty
    pub match_if_empty: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            excludes: Vec::new(),
            match_if_empty: true,
        }
    }
}

impl FilterConfig {
    /// Parse filter configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Serialize filter configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Append command-line globs to the configured ones.
    #[must_use]
    pub fn extend(mut self, includes: Vec<String>, excludes: Vec<String>) -> Self {
        self.includes.extend(includes);
        self.excludes.extend(excludes);
        self
    }

    /// Check every glob compiles.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.includes.iter().chain(&self.excludes) {
            GlobMatcher::validate(pattern)?;
        }
        Ok(())
    }

    /// Build a glob filter after validating the patterns.
    pub fn into_glob_filter(self) -> Result<InstanceFilter<String, GlobMatcher>> {
        self.validate()?;
        Ok(InstanceFilter::with_matcher(
            self.includes,
            self.excludes,
            self.match_if_empty,
            GlobMatcher,
        ))
    }
}
