//! Exhaustive game tree construction over an arena of nodes

use serde::Serialize;

use super::{Board, Cell, Player, lines::LineAnalyzer};
use crate::types::{NodeId, Position};

/// One board state reached by a specific move sequence.
///
/// Many nodes alias the same board via different move orders; the tree keeps
/// them all (deduplication happens at record emission, not here).
#[derive(Debug, Clone)]
pub struct Node {
    /// The board at this node
    pub board: Board,
    /// Cell filled to reach this node; `None` for the root
    pub last_move: Option<Position>,
    /// Child handles, one per legal next move, in ascending cell order
    pub children: Vec<NodeId>,
    /// Terminal score: +1 X just won, -1 O just won, 0 draw. `None` on
    /// internal nodes.
    pub terminal_score: Option<i32>,
    /// Minimax value assigned during backup, written exactly once per node
    pub backed_up_value: Option<i32>,
}

impl Node {
    fn new(board: Board, last_move: Option<Position>) -> Self {
        Self {
            board,
            last_move,
            children: Vec::new(),
            terminal_score: None,
            backed_up_value: None,
        }
    }

    /// True if this node ends the game (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.terminal_score.is_some()
    }
}

/// Complete game tree for Tic-Tac-Toe, stored as an arena.
///
/// Nodes are owned by a flat `Vec` and referenced by [`NodeId`] handles;
/// each node's children are exclusive to it. After generation every node
/// either carries a terminal score or has at least one child, never neither.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// Generate the full tree from the standard empty board with X to move.
    ///
    /// All legal continuations are generated with no pruning: 549,946 nodes,
    /// of which 255,168 are terminal leaves.
    pub fn generate() -> Self {
        Self::generate_from(Board::new())
    }

    /// Generate the full tree of continuations from an arbitrary root board.
    ///
    /// A root that is already won or full becomes a lone terminal node.
    pub fn generate_from(root_board: Board) -> Self {
        let mut tree = GameTree { nodes: Vec::new() };
        let root = tree.push(Node::new(root_board, None));

        if let Some(winner) = root_board.winner() {
            tree.nodes[root.index()].terminal_score =
                Some(if winner == Player::X { 1 } else { -1 });
        } else if !root_board.cells.contains(&Cell::Empty) {
            tree.nodes[root.index()].terminal_score = Some(0);
        } else {
            tree.expand(root);
        }

        tree
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Depth-first expansion: one child per empty cell, win check anchored
    /// at the just-placed cell, recursion flips the mover via the board.
    fn expand(&mut self, parent: NodeId) {
        let parent_board = self.nodes[parent.index()].board;
        let mover = parent_board.to_move;

        for pos in parent_board.empty_positions() {
            let child_board = parent_board
                .make_move(pos)
                .expect("empty positions are always legal during construction");
            let last_move =
                Position::new(pos).expect("empty positions are always within board bounds");

            let child = self.push(Node::new(child_board, Some(last_move)));
            self.nodes[parent.index()].children.push(child);

            if LineAnalyzer::wins_at(&child_board.cells, pos) {
                self.nodes[child.index()].terminal_score =
                    Some(if mover == Player::X { 1 } else { -1 });
            } else if !child_board.cells.contains(&Cell::Empty) {
                self.nodes[child.index()].terminal_score = Some(0);
            } else {
                self.expand(child);
            }
        }
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Look up a node by handle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NodeOutOfBounds`] for a handle that was not
    /// issued by this tree. That is a contract violation, not a runtime
    /// condition; callers propagate it and abort.
    pub fn node(&self, id: NodeId) -> Result<&Node, crate::Error> {
        self.nodes.get(id.index()).ok_or(crate::Error::NodeOutOfBounds {
            node: id,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, crate::Error> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(crate::Error::NodeOutOfBounds { node: id, len })
    }

    /// Total number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in arena order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Compute summary statistics over the generated tree
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            total_nodes: self.nodes.len(),
            ..TreeStats::default()
        };

        for node in &self.nodes {
            match node.terminal_score {
                Some(1) => {
                    stats.leaves += 1;
                    stats.x_wins += 1;
                }
                Some(-1) => {
                    stats.leaves += 1;
                    stats.o_wins += 1;
                }
                Some(_) => {
                    stats.leaves += 1;
                    stats.draws += 1;
                }
                None => stats.internal_nodes += 1,
            }
        }

        stats
    }
}

/// Summary counts over a generated game tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub internal_nodes: usize,
    pub leaves: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_forced_move_tree() {
        // Eight cells filled, no winner yet, only cell 8 open.
        // X O X
        // X O O
        // O X .
        let board = Board::from_string("XOXXOOOX._X").unwrap();
        let tree = GameTree::generate_from(board);

        // Root plus exactly one child.
        assert_eq!(tree.len(), 2);
        let root = tree.node(tree.root()).unwrap();
        assert_eq!(root.children.len(), 1);

        let child = tree.node(root.children[0]).unwrap();
        assert_eq!(child.last_move.map(|p| p.value()), Some(8));
        assert!(child.is_terminal());
    }

    #[test]
    fn immediate_win_labeled_for_maximizer() {
        // X completes the top row on the only sensible branch.
        let board = Board::from_string("XX.OO...._X").unwrap();
        let tree = GameTree::generate_from(board);

        let root = tree.node(tree.root()).unwrap();
        let winning_child = root
            .children
            .iter()
            .map(|&id| tree.node(id).unwrap())
            .find(|n| n.last_move.map(|p| p.value()) == Some(2))
            .unwrap();

        assert_eq!(winning_child.terminal_score, Some(1));
        assert!(winning_child.children.is_empty());
    }

    #[test]
    fn immediate_win_labeled_for_minimizer() {
        let board = Board::from_string("XX.OO...X_O").unwrap();
        let tree = GameTree::generate_from(board);

        let root = tree.node(tree.root()).unwrap();
        let winning_child = root
            .children
            .iter()
            .map(|&id| tree.node(id).unwrap())
            .find(|n| n.last_move.map(|p| p.value()) == Some(5))
            .unwrap();

        assert_eq!(winning_child.terminal_score, Some(-1));
    }

    #[test]
    fn full_board_without_winner_is_draw() {
        // Filling cell 8 completes the board without a line through it.
        let board = Board::from_string("XOXXOOOX._X").unwrap();
        let tree = GameTree::generate_from(board);

        let root = tree.node(tree.root()).unwrap();
        let leaf = tree.node(root.children[0]).unwrap();
        assert_eq!(leaf.terminal_score, Some(0));
    }

    #[test]
    fn terminal_root_gets_no_children() {
        let won = Board::from_string("XXXOO...._O").unwrap();
        let tree = GameTree::generate_from(won);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).unwrap().terminal_score, Some(1));
    }

    #[test]
    fn every_node_terminal_xor_has_children() {
        let board = Board::from_string("XOXOX.O.._O").unwrap();
        let tree = GameTree::generate_from(board);

        for node in tree.iter() {
            assert_ne!(
                node.is_terminal(),
                !node.children.is_empty(),
                "node must be terminal or internal, never both or neither"
            );
        }
    }

    #[test]
    fn stale_handle_is_rejected() {
        let tree = GameTree::generate_from(Board::from_string("XOXXOOOX._X").unwrap());
        let bogus = NodeId::new(tree.len());

        let err = tree.node(bogus).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains(&bogus.to_string()),
            "message should name the offending handle: {message}"
        );
        assert!(message.contains("out of bounds"));
    }

    #[test]
    fn children_follow_ascending_cell_order() {
        let board = Board::from_string("XOXOXO..._X").unwrap();
        let tree = GameTree::generate_from(board);

        let root = tree.node(tree.root()).unwrap();
        let moves: Vec<usize> = root
            .children
            .iter()
            .map(|&id| tree.node(id).unwrap().last_move.unwrap().value())
            .collect();
        assert_eq!(moves, vec![6, 7, 8]);
    }
}
