//! Exhaustive tic-tac-toe solver and training-data generator
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board implementation with validation
//! - Exhaustive game tree generation over an arena of nodes
//! - Depth-scaled minimax backup with deduplicated record emission
//! - Line-oriented dataset export for downstream imitation learning

pub mod cli;
pub mod error;
pub mod export;
pub mod solver;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use solver::{ROOT_DEPTH, Recorder, backup, encode_line};
pub use tictactoe::{Board, Cell, GameTree, Player, TreeStats};
pub use types::{NodeId, Position};
