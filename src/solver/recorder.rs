//! Deduplicated training-record accumulation

use std::collections::HashSet;

use crate::{
    tictactoe::{Board, Cell},
    types::Position,
};

/// Encode the nine cells as comma-separated one-hot triples.
///
/// Cell categories: empty is `1,0,0`, an X mark `0,1,0`, an O mark `0,0,1`.
pub fn encode_cells(board: &Board) -> String {
    board
        .cells
        .iter()
        .map(|&cell| match cell {
            Cell::Empty => "1,0,0",
            Cell::X => "0,1,0",
            Cell::O => "0,0,1",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format one training record: selected move, then the board encoding.
///
/// The layout (four spaces after the move, single trailing space) is fixed;
/// downstream consumers parse it as-is.
pub fn encode_line(selected: Position, board: &Board) -> String {
    format!("{},    {} ", selected, encode_cells(board))
}

/// Accumulates emitted records and suppresses duplicates.
///
/// One recorder spans a whole backup run, so deduplication is global across
/// the tree rather than per subtree. The recorder is passed explicitly into
/// the backup entry point instead of living in ambient state, which keeps it
/// testable in isolation.
#[derive(Debug, Default)]
pub struct Recorder {
    lines: HashSet<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected move for a board. Returns false if an identical
    /// line had already been emitted.
    pub fn record(&mut self, selected: Position, board: &Board) -> bool {
        self.lines.insert(encode_line(selected, board))
    }

    /// Number of distinct lines accumulated so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the accumulated lines in arbitrary order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Look up the recorded move for a specific board, if present.
    pub fn move_for(&self, board: &Board) -> Option<usize> {
        let suffix = format!(",    {} ", encode_cells(board));
        self.lines
            .iter()
            .find_map(|line| line.strip_suffix(suffix.as_str()))
            .and_then(|prefix| prefix.parse().ok())
    }

    /// Consume the recorder and return its lines sorted.
    ///
    /// The set itself is unordered; sorting gives stable output files.
    pub fn into_sorted_lines(self) -> Vec<String> {
        let mut lines: Vec<String> = self.lines.into_iter().collect();
        lines.sort();
        lines
    }
}
