//! grid-search CLI - Tic-Tac-Toe move search with BFS, DFS and UCS
//!
//! This CLI provides:
//! - Choosing a single move for a given board
//! - Playing an interactive game against the engine or another person
//! - Comparing the three strategies against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid-search")]
#[command(version, about = "Tic-Tac-Toe move search engine", long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a move for a board
    Select(grid_search::cli::commands::select::SelectArgs),

    /// Play an interactive game
    Play(grid_search::cli::commands::play::PlayArgs),

    /// Compare search strategies against a random opponent
    Compare(grid_search::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Select(args) => grid_search::cli::commands::select::execute(args),
        Commands::Play(args) => grid_search::cli::commands::play::execute(args),
        Commands::Compare(args) => grid_search::cli::commands::compare::execute(args),
    }
}
