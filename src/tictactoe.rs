//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game_tree;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game_tree::{GameTree, Node, TreeStats};
pub use lines::{LineAnalyzer, WINNING_LINES};
