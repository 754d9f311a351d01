//! Checkers CLI - command-line front end for the rules engine
//!
//! Commands:
//! - setup: Print or save the standard starting layout
//! - replay: Play a move list and show the result
//! - hints: Show legal destinations for a piece

mod hints;
mod notation;
mod replay;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkers_core::Setup;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Small-board checkers rules engine")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the standard setup as JSON, or write it to a file
    Setup {
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Play a list of moves and show the final board
    Replay(replay::ReplayArgs),
    /// Show legal destinations and capture hints for a piece
    Hints(hints::HintsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Setup { output } => {
            let setup = Setup::standard();
            match output {
                Some(path) => {
                    setup.save(&path)?;
                    tracing::info!("Wrote setup to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&setup)?),
            }
            Ok(())
        }
        Commands::Replay(args) => replay::run(args),
        Commands::Hints(args) => hints::run(args),
    }
}
