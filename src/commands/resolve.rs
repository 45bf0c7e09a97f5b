//! Resolve command implementation

use resource_io::{PathResource, Resource, Result};

use crate::cli::ResolveArgs;

/// Run resolve command
///
/// Prints the resolved path on the first line and its description on the
/// second.
pub fn run(args: ResolveArgs) -> Result<()> {
    let base = PathResource::new(&args.path);
    let resolved = base.create_relative(&args.relative);

    println!("{}", resolved.path_str());
    println!("{}", resolved.description());
    Ok(())
}
