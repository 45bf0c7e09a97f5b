//! Path providers: the storage services a [`PathResource`] delegates to.
//!
//! A provider answers probes (existence, kind, permissions), metadata
//! queries and stream opens for paths it owns. [`LocalFs`] is the default
//! and maps straight onto `std::fs`; [`MemoryFs`] keeps a tree in process
//! memory and has no native-file mapping at all.
//!
//! Providers report failures as plain [`std::io::Error`]s. Translation into
//! resource-level errors happens in the resource layer, not here.
//!
//! [`PathResource`]: crate::resource::PathResource

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::{MEMORY_SCHEME, MemoryFs};

use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::resource::ResourceUri;

/// Hierarchical path service backing a path resource
///
/// Probes return `bool` and never fail; an unreachable location is simply
/// "not there". Queries and opens return the provider's own error.
pub trait PathProvider: fmt::Debug + Send + Sync {
    /// URI scheme of locators produced by [`PathProvider::to_uri`].
    fn scheme(&self) -> &'static str;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_readable(&self, path: &Path) -> bool;

    fn is_writable(&self, path: &Path) -> bool;

    /// Size of the content in bytes.
    fn size(&self, path: &Path) -> io::Result<u64>;

    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Open a fresh reader positioned at the start of the content.
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;

    /// Open a fresh writer, creating the content or truncating it.
    fn open_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>>;

    /// Map the path onto the local filesystem.
    ///
    /// Providers without such a mapping fail with
    /// [`io::ErrorKind::Unsupported`].
    fn to_native(&self, path: &Path) -> io::Result<PathBuf>;

    /// Absolute form of the path within this provider.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

    /// Locator for the path; directories get a trailing slash.
    fn to_uri(&self, path: &Path) -> io::Result<ResourceUri> {
        let uri = ResourceUri::from_path(self.scheme(), &self.absolute(path)?);
        if self.is_dir(path) {
            Ok(uri.with_trailing_slash())
        } else {
            Ok(uri)
        }
    }
}
