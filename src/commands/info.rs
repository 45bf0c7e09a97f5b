//! Info command implementation
//!
//! Reports every property of a resource that can be answered right now.
//! Questions the resource cannot answer (no content yet, no native file)
//! are left out rather than failing the command.

use std::time::UNIX_EPOCH;

use serde::Serialize;

use resource_io::{PathResource, Resource, ResourceError, Result, WritableResource};

use crate::cli::InfoArgs;

/// Snapshot of a resource's properties
#[derive(Debug, Serialize)]
struct ResourceInfo {
    path: String,
    description: String,
    exists: bool,
    readable: bool,
    writable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
}

impl ResourceInfo {
    fn collect(resource: &PathResource) -> Self {
        let last_modified_ms = resource
            .last_modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .and_then(|elapsed| u64::try_from(elapsed.as_millis()).ok());

        Self {
            path: resource.path_str(),
            description: resource.description(),
            exists: resource.exists(),
            readable: resource.is_readable(),
            writable: resource.is_writable(),
            content_length: resource.content_length().ok(),
            last_modified_ms,
            uri: resource.uri().ok().map(|uri| uri.to_string()),
            filename: resource.filename(),
        }
    }

    fn print_text(&self) {
        println!("path: {}", self.path);
        println!("description: {}", self.description);
        println!("exists: {}", self.exists);
        println!("readable: {}", self.readable);
        println!("writable: {}", self.writable);
        if let Some(length) = self.content_length {
            println!("content_length: {length}");
        }
        if let Some(modified) = self.last_modified_ms {
            println!("last_modified_ms: {modified}");
        }
        if let Some(uri) = &self.uri {
            println!("uri: {uri}");
        }
        if let Some(filename) = &self.filename {
            println!("filename: {filename}");
        }
    }
}

/// Run info command
pub fn run(args: InfoArgs) -> Result<()> {
    let resource = PathResource::new(&args.path);
    let info = ResourceInfo::collect(&resource);
    tracing::debug!(path = %info.path, exists = info.exists, "collected resource info");

    if args.json {
        let json =
            serde_json::to_string_pretty(&info).map_err(|e| ResourceError::Io(e.into()))?;
        println!("{json}");
    } else {
        info.print_text();
    }
    Ok(())
}
