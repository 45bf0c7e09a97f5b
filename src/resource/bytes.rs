//! In-memory [`Resource`] over a byte buffer.

use std::io::{Cursor, Read};
use std::sync::Arc;

use super::Resource;
use crate::error::Result;

const DEFAULT_DESCRIPTION: &str = "resource loaded from byte array";

/// Resource whose content is an owned byte buffer.
///
/// Always exists and can be read any number of times. It has no location, so
/// locators, native files, timestamps and relative resources all fall back to
/// the failing defaults of [`Resource`].
#[derive(Debug, Clone)]
pub struct ByteArrayResource {
    bytes: Arc<[u8]>,
    description: String,
}

impl ByteArrayResource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_description(bytes, DEFAULT_DESCRIPTION)
    }

    /// Buffer with a note on where the bytes came from.
    pub fn with_description(bytes: impl Into<Vec<u8>>, description: impl Into<String>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
            description: description.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Resource for ByteArrayResource {
    fn description(&self) -> String {
        format!("byte array resource [{}]", self.description)
    }

    fn exists(&self) -> bool {
        true
    }

    fn input_stream(&self) -> Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.bytes))))
    }

    fn content_length(&self) -> Result<u64> {
        Ok(self.bytes.len() as u64)
    }

    fn same_as(&self, other: &dyn Resource) -> bool {
        other
            .downcast_ref::<ByteArrayResource>()
            .is_some_and(|other| self == other)
    }
}

/// Equal when the content is equal; the description is not compared.
impl PartialEq for ByteArrayResource {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteArrayResource {}

impl std::hash::Hash for ByteArrayResource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}
