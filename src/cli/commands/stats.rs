//! Stats command - exhaustive enumeration and solve statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    export::{DatasetReport, write_report_json},
    solver::{Recorder, backup},
    tictactoe::GameTree,
};

#[derive(Parser, Debug)]
#[command(about = "Show game tree and solve statistics")]
pub struct StatsArgs {
    /// Also write the report as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let spinner = create_spinner("Enumerating the full game tree...");

    let mut tree = GameTree::generate();
    spinner.set_message("Backing up minimax values...");

    let mut recorder = Recorder::new();
    let root_value = backup(&mut tree, &mut recorder)?;
    let stats = tree.stats();
    spinner.finish_and_clear();

    print_section("Exhaustive enumeration");
    print_kv("Total nodes", &format_number(stats.total_nodes));
    print_kv("Internal nodes", &format_number(stats.internal_nodes));
    print_kv("Terminal leaves", &format_number(stats.leaves));
    print_kv("X wins", &format_number(stats.x_wins));
    print_kv("O wins", &format_number(stats.o_wins));
    print_kv("Draws", &format_number(stats.draws));

    print_section("Minimax solve");
    print_kv("Unique records", &format_number(recorder.len()));
    print_kv("Root value", &root_value.to_string());

    if let Some(path) = &args.json {
        let report = DatasetReport {
            tree: stats,
            unique_records: recorder.len(),
            root_value,
        };
        write_report_json(path, &report)?;
        println!("\nReport written to: {}", path.display());
    }

    Ok(())
}
