//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_file, create_nested_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let file = write_file(temp.path(), "docs/readme.md", "# Readme");
//!     let dir = create_nested_dir(&temp, "deep/nested/path");
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a nested directory structure inside a temp directory.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Write a file below `base`, creating parent directories as needed.
///
/// Returns the full path of the written file.
///
/// # Panics
///
/// Panics if the file cannot be created.
pub fn write_file(base: &Path, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let full_path = base.join(path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write test file");
    full_path
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_nested_dir() {
        let temp = create_temp_dir();
        let nested = create_nested_dir(&temp, "deep/nested/path");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp = create_temp_dir();
        let file = write_file(temp.path(), "a/b/c.txt", "content");
        assert_eq!(
            std::fs::read_to_string(file).expect("Failed to read file"),
            "content"
        );
    }
}
