//! Resource handles over heterogeneous backing stores
//!
//! A [`Resource`] is a handle to byte content at a location. Implementations
//! supply a description and an input stream; every other operation has a
//! default derived from those two (and from [`Resource::file`] where a native
//! file exists), which kinds override when their store offers something
//! cheaper or more precise.
//!
//! - [`PathResource`]: a normalized path inside a [`PathProvider`]
//! - [`ByteArrayResource`]: an in-memory buffer
//!
//! [`PathProvider`]: crate::provider::PathProvider

mod bytes;
mod path;
pub mod uri;

pub use bytes::ByteArrayResource;
pub use path::PathResource;
pub use uri::ResourceUri;

use std::any::Any;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::{Result, ResourceError, no_relative, not_found, not_resolvable};

/// Handle to byte content identified by a location
///
/// A resource never changes the location it denotes, but the content there
/// may appear, change or vanish between calls. Each call queries the store
/// afresh; nothing is cached.
pub trait Resource: Any + fmt::Debug + Send + Sync {
    /// Human-readable identifier for diagnostics. Never parse it.
    fn description(&self) -> String;

    /// Open a fresh stream positioned at the start of the content.
    ///
    /// The caller owns the stream and is responsible for dropping it.
    fn input_stream(&self) -> Result<Box<dyn Read + Send>>;

    /// Whether the content is currently present.
    ///
    /// Checks the native file when there is one, otherwise tries to open
    /// the content. Absence is `false`, never an error.
    fn exists(&self) -> bool {
        if let Ok(file) = self.file() {
            return file.exists();
        }
        self.input_stream().is_ok()
    }

    /// Whether the content can be opened for reading now.
    fn is_readable(&self) -> bool {
        self.exists()
    }

    /// Whether this resource stands for an already-open, single-use stream.
    fn is_open(&self) -> bool {
        false
    }

    fn uri(&self) -> Result<ResourceUri> {
        Err(not_resolvable(self.description(), "URI"))
    }

    /// Locator usable to re-derive the resource; derived from [`Resource::uri`].
    fn url(&self) -> Result<ResourceUri> {
        self.uri()
    }

    /// Native filesystem path of the content.
    fn file(&self) -> Result<PathBuf> {
        Err(not_resolvable(self.description(), "absolute file path"))
    }

    /// Size of the content in bytes.
    ///
    /// Reads the whole stream and counts; kinds with a size query should
    /// override this.
    fn content_length(&self) -> Result<u64> {
        let mut stream = self.input_stream()?;
        Ok(io::copy(&mut stream, &mut io::sink())?)
    }

    /// Last modification time, taken from the native file.
    fn last_modified(&self) -> Result<SystemTime> {
        let file = self.file()?;
        let meta = fs::metadata(&file).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => not_found(self.description()),
            _ => ResourceError::Io(err),
        })?;
        Ok(meta.modified()?)
    }

    /// Resource at `relative_path` underneath this one.
    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>> {
        let _ = relative_path;
        Err(no_relative(self.description()))
    }

    /// Last segment of the location, for kinds that have one.
    fn filename(&self) -> Option<String> {
        None
    }

    /// Whether `other` denotes the same resource.
    ///
    /// Compares descriptions; kinds with their own notion of identity
    /// override this.
    fn same_as(&self, other: &dyn Resource) -> bool {
        self.description() == other.description()
    }
}

impl dyn Resource {
    /// The concrete resource, if it is a `T`.
    pub fn downcast_ref<T: Resource>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// A resource that can also be written
pub trait WritableResource: Resource {
    fn is_writable(&self) -> bool {
        true
    }

    /// Open a fresh stream that replaces the content.
    fn output_stream(&self) -> Result<Box<dyn Write + Send>>;
}

impl fmt::Display for dyn Resource + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Equal only when both sides agree, so a kind with its own identity is
/// never equal to another kind that merely shares its description.
impl PartialEq for dyn Resource {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) && other.same_as(self)
    }
}
