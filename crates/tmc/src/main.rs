//! TMC CLI - magic comment editing for TeX documents.
//!
//! Provides commands for:
//! - `show`: Print the magic comments found in a document
//! - `set`: Assign magic comment values
//! - `unset`: Remove magic comments

mod commands;
mod document;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{SetArgs, ShowArgs, UnsetArgs};
use output::Output;

/// TMC - TeX magic comments.
#[derive(Parser)]
#[command(name = "tmc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the magic comments found in a document.
    Show(ShowArgs),
    /// Assign magic comment values.
    Set(SetArgs),
    /// Remove magic comments.
    Unset(UnsetArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Log level comes from RUST_LOG; default is warnings only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(&output),
        Commands::Set(args) => args.execute(&output),
        Commands::Unset(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
