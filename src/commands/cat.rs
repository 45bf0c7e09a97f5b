//! Cat command implementation
//!
//! Streams a resource's content to stdout.

use std::io::{self, Write};

use resource_io::{PathResource, Resource, Result};

use crate::cli::CatArgs;

/// Run cat command
pub fn run(args: CatArgs) -> Result<()> {
    let resource = PathResource::new(&args.path);
    let mut input = resource.input_stream()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    io::copy(&mut input, &mut out)?;
    out.flush()?;
    Ok(())
}
