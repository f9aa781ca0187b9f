//! ttt-oracle CLI - exhaustive tic-tac-toe solver and training-data generator
//!
//! This CLI provides a unified interface for:
//! - Generating the deduplicated optimal-move training dataset
//! - Inspecting full-enumeration and solve statistics
//! - Solving individual positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-oracle")]
#[command(version, about = "Exhaustive tic-tac-toe solver and training-data generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the deduplicated training dataset
    Generate(ttt_oracle::cli::commands::generate::GenerateArgs),

    /// Show game tree and solve statistics
    Stats(ttt_oracle::cli::commands::stats::StatsArgs),

    /// Solve a single position and print the optimal move
    Solve(ttt_oracle::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => ttt_oracle::cli::commands::generate::execute(args),
        Commands::Stats(args) => ttt_oracle::cli::commands::stats::execute(args),
        Commands::Solve(args) => ttt_oracle::cli::commands::solve::execute(args),
    }
}
