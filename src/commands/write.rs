//! Write command implementation
//!
//! Replaces a resource's content with whatever arrives on stdin.

use std::io::{self, Write};

use resource_io::{PathResource, Resource, Result, WritableResource};

use crate::cli::WriteArgs;

/// Run write command
pub fn run(args: WriteArgs) -> Result<()> {
    let resource = PathResource::new(&args.path);
    let mut output = resource.output_stream()?;

    let written = io::copy(&mut io::stdin().lock(), &mut output)?;
    output.flush()?;

    println!("Wrote {} bytes to {}", written, resource.description());
    Ok(())
}
