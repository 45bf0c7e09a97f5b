//! List command implementation
//!
//! Walks a directory and prints the files an include/exclude glob filter
//! accepts, as forward-slash paths relative to the directory.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use resource_io::error::not_found;
use resource_io::path_utils::to_forward_slashes;
use resource_io::{FilterConfig, GlobMatcher, InstanceFilter, Result};

use crate::cli::ListArgs;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)?,
        None => FilterConfig::default(),
    };
    if let Some(match_if_empty) = args.match_if_empty {
        config.match_if_empty = match_if_empty;
    }
    let filter = config.extend(args.include, args.exclude).into_glob_filter()?;
    tracing::debug!(%filter, dir = %args.dir.display(), "listing");

    for file in matching_files(&args.dir, &filter)? {
        println!("{file}");
    }
    Ok(())
}

/// Files below `dir` accepted by `filter`, sorted by path.
fn matching_files(
    dir: &Path,
    filter: &InstanceFilter<String, GlobMatcher>,
) -> Result<Vec<String>> {
    if !dir.exists() {
        return Err(not_found(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", dir.display()),
        )
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let relative = to_forward_slashes(relative);
        if filter.matches(&relative) {
            files.push(relative);
        }
    }
    Ok(files)
}
