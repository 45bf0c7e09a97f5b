//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// resio - inspect and stream path resources
#[derive(Parser, Debug)]
#[command(
    name = "resio",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect, read, write and filter path resources",
    after_help = "Examples:\n    \
                  resio cat ./config/app.yaml\n    \
                  resio info ./data --json\n    \
                  echo hello | resio write ./out.txt\n    \
                  resio resolve ./docs guide/intro.md\n    \
                  resio list ./src --include '**/*.rs' --exclude '**/tests.rs'"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log filter directive (e.g. `resource_io=trace`)
    #[arg(long, global = true, env = "RESIO_LOG", value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a resource's content
    Cat(CatArgs),

    /// Show what is known about a resource
    Info(InfoArgs),

    /// Replace a resource's content with stdin
    Write(WriteArgs),

    /// Resolve a path underneath a resource
    Resolve(ResolveArgs),

    /// List files below a directory through an include/exclude filter
    List(ListArgs),
}

/// Arguments for the cat command
#[derive(Parser, Debug)]
pub struct CatArgs {
    /// Path of the resource to read
    pub path: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path of the resource to describe
    pub path: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the write command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Path of the resource to create or replace
    pub path: PathBuf,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve below a file (not next to it):\n    resio resolve ./a/b child\n\n\
                  Normalize on the way:\n    resio resolve ./a/b ./x/../y")]
pub struct ResolveArgs {
    /// Base resource path
    pub path: PathBuf,

    /// Path to resolve underneath the base
    pub relative: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Only Rust sources:\n    resio list ./src --include '**/*.rs'\n\n\
                  Everything except build output:\n    resio list . --exclude 'target/**'\n\n\
                  Filters from a file:\n    resio list . --config filter.yaml")]
pub struct ListArgs {
    /// Directory to walk
    pub dir: PathBuf,

    /// Glob a file must match (repeatable)
    #[arg(long, short = 'i', value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob that rejects a file (repeatable)
    #[arg(long, short = 'e', value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// YAML filter configuration; command-line globs are appended to it
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Result when no globs are given at all
    #[arg(long, value_name = "BOOL")]
    pub match_if_empty: Option<bool>,
}
