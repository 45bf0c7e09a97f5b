//! [`Resource`] implementation for hierarchical path handles.

use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, trace};

use super::{Resource, ResourceUri, WritableResource};
use crate::error::{Result, invalid_uri, is_directory, not_found, not_resolvable};
use crate::path_utils;
use crate::provider::{LocalFs, PathProvider};

/// Resource denoting a normalized path inside a [`PathProvider`].
///
/// The path is normalized once, at construction. Relative resources are
/// resolved *underneath* this path, even when it names a file:
/// `/dir1/file` plus `"dir2"` is `/dir1/file/dir2`, not `/dir1/dir2`.
///
/// Two path resources are equal when their normalized paths are equal,
/// whichever form they were built from.
#[derive(Debug, Clone)]
pub struct PathResource {
    path: PathBuf,
    provider: Arc<dyn PathProvider>,
}

impl PathResource {
    /// Resource for a path on the local filesystem.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_provider(path, Arc::new(LocalFs))
    }

    /// Resource for a path inside `provider`.
    pub fn with_provider(path: impl AsRef<Path>, provider: Arc<dyn PathProvider>) -> Self {
        Self {
            path: path_utils::normalize(path.as_ref()),
            provider,
        }
    }

    /// Resource for a `file://` locator on the local filesystem.
    pub fn from_uri(uri: &ResourceUri) -> Result<Self> {
        Self::from_uri_in(uri, Arc::new(LocalFs))
    }

    /// Resource for a locator whose scheme matches `provider`.
    pub fn from_uri_in(uri: &ResourceUri, provider: Arc<dyn PathProvider>) -> Result<Self> {
        if uri.scheme() != provider.scheme() {
            return Err(invalid_uri(
                uri.to_string(),
                format!(
                    "scheme '{}' is not served by the '{}' provider",
                    uri.scheme(),
                    provider.scheme()
                ),
            ));
        }
        Ok(Self::with_provider(uri.to_path(), provider))
    }

    /// Parse a locator string and build a local resource from it.
    pub fn parse_uri(input: &str) -> Result<Self> {
        Self::from_uri(&ResourceUri::parse(input)?)
    }

    /// The normalized path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The normalized path as text.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn provider(&self) -> &Arc<dyn PathProvider> {
        &self.provider
    }

    /// Resolve `relative_path` underneath this resource's path.
    ///
    /// The result shares this resource's provider.
    #[must_use]
    pub fn create_relative(&self, relative_path: &str) -> PathResource {
        Self::with_provider(
            path_utils::resolve(&self.path, relative_path),
            Arc::clone(&self.provider),
        )
    }

    fn is_dir(&self) -> bool {
        self.provider.is_dir(&self.path)
    }
}

impl Resource for PathResource {
    fn description(&self) -> String {
        let absolute = self
            .provider
            .absolute(&self.path)
            .unwrap_or_else(|_| self.path.clone());
        format!("path [{}]", absolute.display())
    }

    fn exists(&self) -> bool {
        let exists = self.provider.exists(&self.path);
        trace!(path = %self.path.display(), exists, "probed existence");
        exists
    }

    /// Readable content must also not be a directory.
    fn is_readable(&self) -> bool {
        self.provider.is_readable(&self.path) && !self.is_dir()
    }

    fn input_stream(&self) -> Result<Box<dyn Read + Send>> {
        // Re-checked on every open: the content may have vanished since any
        // earlier probe.
        if !self.exists() {
            return Err(not_found(self.path_str()));
        }
        if self.is_dir() {
            return Err(is_directory(self.path_str()));
        }
        debug!(path = %self.path.display(), "opening input stream");
        Ok(self.provider.open_read(&self.path)?)
    }

    fn uri(&self) -> Result<ResourceUri> {
        Ok(self.provider.to_uri(&self.path)?)
    }

    fn url(&self) -> Result<ResourceUri> {
        self.uri()
    }

    fn file(&self) -> Result<PathBuf> {
        match self.provider.to_native(&self.path) {
            Ok(file) => Ok(file),
            Err(err) if err.kind() == io::ErrorKind::Unsupported => {
                debug!(
                    path = %self.path.display(),
                    scheme = self.provider.scheme(),
                    "provider has no native file mapping"
                );
                Err(not_resolvable(self.path_str(), "absolute file path"))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn content_length(&self) -> Result<u64> {
        Ok(self.provider.size(&self.path)?)
    }

    /// Queries the provider directly; the default goes through
    /// [`Resource::file`], which not every provider supports.
    fn last_modified(&self) -> Result<SystemTime> {
        Ok(self.provider.modified(&self.path)?)
    }

    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>> {
        Ok(Box::new(PathResource::create_relative(self, relative_path)))
    }

    fn filename(&self) -> Option<String> {
        path_utils::file_name(&self.path)
    }

    /// Only another path resource with the same normalized path.
    fn same_as(&self, other: &dyn Resource) -> bool {
        other
            .downcast_ref::<PathResource>()
            .is_some_and(|other| self == other)
    }
}

impl WritableResource for PathResource {
    /// Writable content must also not be a directory.
    fn is_writable(&self) -> bool {
        self.provider.is_writable(&self.path) && !self.is_dir()
    }

    /// Creates the content if missing, truncates it otherwise.
    fn output_stream(&self) -> Result<Box<dyn Write + Send>> {
        if self.is_dir() {
            return Err(is_directory(self.path_str()));
        }
        debug!(path = %self.path.display(), "opening output stream");
        Ok(self.provider.open_write(&self.path)?)
    }
}

impl PartialEq for PathResource {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for PathResource {}

impl Hash for PathResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl From<PathBuf> for PathResource {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for PathResource {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PathResource {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
