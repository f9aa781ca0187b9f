//! Solve command - optimal move for a single position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    cli::output::{format_number, print_kv},
    solver::{Recorder, backup},
    tictactoe::{Board, GameTree},
    types::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a single position and show the optimal move")]
pub struct SolveArgs {
    /// Board in row-major string form, e.g. 'XOX.O....' or 'XX......._O'
    pub board: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    if board.is_terminal() {
        return Err(Error::TerminalPosition {
            label: board.encode(),
        }
        .into());
    }

    let mut tree = GameTree::generate_from(board);
    let mut recorder = Recorder::new();
    let value = backup(&mut tree, &mut recorder)?;
    let best = recorder
        .move_for(&board)
        .context("no record emitted for the root position")?;
    let best = Position::new(best)?;

    println!("{board}");
    println!();
    print_kv("To move", &format!("{:?}", board.to_move));
    print_kv("Pieces on board", &board.occupied_count().to_string());
    print_kv(
        "Optimal move",
        &format!("position {} (row {}, col {})", best, best.row(), best.col()),
    );
    print_kv("Backed-up value", &value.to_string());
    print_kv("Subtree nodes", &format_number(tree.len()));
    print_kv("Unique records", &format_number(recorder.len()));

    Ok(())
}
