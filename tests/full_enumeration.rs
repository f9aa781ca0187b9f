//! Regression checks for the exhaustive enumeration: the tic-tac-toe game
//! tree has known exact counts, which pin the generator against drift.

use ttt_oracle::{GameTree, ROOT_DEPTH, Recorder, backup};

#[test]
fn full_tree_counts_match_known_constants() {
    let tree = GameTree::generate();
    let stats = tree.stats();

    // 255,168 distinct game plays under full enumeration without symmetry
    // reduction; one tree node per move prefix.
    assert_eq!(stats.total_nodes, 549_946);
    assert_eq!(stats.leaves, 255_168);
    assert_eq!(stats.internal_nodes, 549_946 - 255_168);

    // Outcome split over all complete plays.
    assert_eq!(stats.x_wins, 131_184);
    assert_eq!(stats.o_wins, 77_904);
    assert_eq!(stats.draws, 46_080);
}

#[test]
fn every_node_is_terminal_xor_internal() {
    let tree = GameTree::generate();

    for node in tree.iter() {
        assert_ne!(
            node.is_terminal(),
            !node.children.is_empty(),
            "node must carry a terminal score or have children, never neither"
        );
    }
}

#[test]
fn terminal_leaves_have_no_children() {
    let tree = GameTree::generate();

    for node in tree.iter() {
        if node.is_terminal() {
            assert!(node.children.is_empty());
        }
    }
}

#[test]
fn backed_up_values_respect_depth_bound() {
    let mut tree = GameTree::generate();
    let mut recorder = Recorder::new();
    backup(&mut tree, &mut recorder).unwrap();

    for node in tree.iter() {
        let value = node
            .backed_up_value
            .expect("backup must assign a value to every node");
        assert!(
            (-ROOT_DEPTH..=ROOT_DEPTH).contains(&value),
            "value {value} outside [-{ROOT_DEPTH}, {ROOT_DEPTH}]"
        );
    }
}

#[test]
fn optimal_play_from_the_empty_board_is_a_draw() {
    let mut tree = GameTree::generate();
    let mut recorder = Recorder::new();
    let root_value = backup(&mut tree, &mut recorder).unwrap();

    assert_eq!(root_value, 0);
    assert_eq!(
        tree.node(tree.root()).unwrap().backed_up_value,
        Some(0)
    );
}
