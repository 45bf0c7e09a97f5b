//! resio - inspect and stream path resources
//!
//! A thin command line front end over the `resource_io` library: read,
//! write and describe path resources, resolve paths underneath them, and
//! list directory trees through include/exclude glob filters.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    resource_io::logging::init(cli.verbose, cli.log.as_deref());

    let result = match cli.command {
        Commands::Cat(args) => commands::cat::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Write(args) => commands::write::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::List(args) => commands::list::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
