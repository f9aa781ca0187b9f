//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position on the game board (0-8 for Tic-Tac-Toe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < 9 {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Row index under the fixed row-major cell layout.
    pub fn row(&self) -> usize {
        self.0 / 3
    }

    /// Column index under the fixed row-major cell layout.
    pub fn col(&self) -> usize {
        self.0 % 3
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A handle into the game tree arena.
///
/// Nodes never move once pushed, so a `NodeId` stays valid for the lifetime
/// of the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Get the arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
