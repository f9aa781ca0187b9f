//! Generate command - build the full tree, solve it, emit the dataset

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    export::{self, DatasetReport},
    solver::{Recorder, backup},
    tictactoe::GameTree,
};

#[derive(Parser, Debug)]
#[command(about = "Generate the deduplicated optimal-move training dataset")]
pub struct GenerateArgs {
    /// Output file path (dataset goes to stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub stats_json: Option<PathBuf>,

    /// Suppress progress and summary output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let spinner = (!args.quiet).then(|| create_spinner("Generating game tree..."));

    let mut tree = GameTree::generate();

    if let Some(pb) = &spinner {
        pb.set_message("Backing up minimax values...");
    }

    let mut recorder = Recorder::new();
    let root_value = backup(&mut tree, &mut recorder)?;
    let stats = tree.stats();
    let unique_records = recorder.len();
    let lines = recorder.into_sorted_lines();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match &args.output {
        Some(path) => export::write_lines_to_path(path, &lines)?,
        None => export::write_lines(&mut io::stdout().lock(), &lines)?,
    }

    let report = DatasetReport {
        tree: stats,
        unique_records,
        root_value,
    };

    if let Some(path) = &args.stats_json {
        export::write_report_json(path, &report)?;
    }

    // Summary only when the dataset itself is not on stdout.
    if !args.quiet {
        if let Some(path) = &args.output {
            print_section("Dataset summary");
            print_kv("Output", &path.display().to_string());
            print_kv("Tree nodes", &format_number(stats.total_nodes));
            print_kv("Terminal leaves", &format_number(stats.leaves));
            print_kv("Unique records", &format_number(unique_records));
            print_kv("Root value", &root_value.to_string());
        }
    }

    Ok(())
}
