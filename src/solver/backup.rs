//! Post-order minimax backup over the generated game tree

use crate::{
    Error, Result,
    solver::recorder::Recorder,
    tictactoe::GameTree,
    types::{NodeId, Position},
};

/// Depth assigned to the root of the backup.
///
/// Terminal contributions are `terminal_score * remaining_depth`, so with a
/// root depth of 10 every backed-up value lies in [-10, 10]. Scaling by the
/// remaining depth makes faster wins and slower losses score better than
/// equal outcomes reached later, which is the tie-break that decides which
/// move gets recorded.
pub const ROOT_DEPTH: i32 = 10;

/// Back up minimax values through the whole tree and emit one record per
/// non-terminal node into `recorder`.
///
/// The root maximizes iff its mover is X, keeping the sign convention of the
/// terminal labels (+1 for an X win). Returns the root's backed-up value;
/// for the standard empty board that value is 0.
///
/// # Errors
///
/// Contract violations only: a childless node without a terminal score, a
/// node handle outside the arena, or an internal node yielding no selection.
/// None of these can occur on a tree produced by [`GameTree::generate`].
pub fn backup(tree: &mut GameTree, recorder: &mut Recorder) -> Result<i32> {
    let root = tree.root();
    let maximizing = tree.node(root)?.board.to_move.is_maximizing();
    backup_node(tree, root, maximizing, ROOT_DEPTH, recorder)
}

fn backup_node(
    tree: &mut GameTree,
    id: NodeId,
    maximizing: bool,
    depth: i32,
    recorder: &mut Recorder,
) -> Result<i32> {
    let node = tree.node(id)?;
    let terminal_score = node.terminal_score;
    let board = node.board;
    let children = node.children.clone();

    if let Some(score) = terminal_score {
        let value = score * depth;
        tree.node_mut(id)?.backed_up_value = Some(value);
        return Ok(value);
    }

    if children.is_empty() {
        return Err(Error::MissingTerminalScore { node: id });
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut selected: Option<Position> = None;

    for child_id in children {
        let value = backup_node(tree, child_id, !maximizing, depth - 1, recorder)?;

        // Strict comparison: ties keep the first child with the best value.
        let improved = if maximizing { value > best } else { value < best };
        if improved {
            best = value;
            selected = tree.node(child_id)?.last_move;
        }
    }

    let selected = selected.ok_or(Error::NoMoveSelected { node: id })?;
    recorder.record(selected, &board);

    tree.node_mut(id)?.backed_up_value = Some(best);
    Ok(best)
}
