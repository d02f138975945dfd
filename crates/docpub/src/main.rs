//! docpub CLI - Publish markdown articles to Google Docs.
//!
//! Provides commands for:
//! - `publish`: Create or fill a Google Doc from a markdown file
//! - `inspect`: Show the plain text, directives and requests for a file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InspectArgs, PublishArgs};
use output::Output;

/// docpub - Publish markdown articles to Google Docs.
#[derive(Parser)]
#[command(name = "docpub", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a markdown file to Google Docs.
    Publish(PublishArgs),
    /// Show how a markdown file would be published.
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Publish(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
