//! Resource IO - uniform handles over heterogeneous byte stores
//!
//! A [`Resource`] answers the same questions whatever backs it: does the
//! content exist, can it be read, how large is it, when did it change, where
//! does it live. [`PathResource`] implements the full contract (including
//! writing) on top of a [`PathProvider`], normalizing its path once and
//! translating provider failures into a small set of [`ResourceError`]s.
//!
//! [`InstanceFilter`] is a separate include/exclude combinator with a
//! pluggable per-candidate [`Matcher`].
//!
//! ```no_run
//! use std::io::Read;
//! use resource_io::{PathResource, Resource};
//!
//! let config = PathResource::new("/etc/app/./config.yaml");
//! let mut content = String::new();
//! config.input_stream()?.read_to_string(&mut content)?;
//! # Ok::<(), resource_io::ResourceError>(())
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod path_utils;
pub mod provider;
pub mod resource;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

pub use error::{NotFoundKind, ResourceError, Result};
pub use filter::{Equality, FilterConfig, GlobMatcher, InstanceFilter, Matcher};
pub use provider::{LocalFs, MemoryFs, PathProvider};
pub use resource::{ByteArrayResource, PathResource, Resource, ResourceUri, WritableResource};
