//! Board-level invariants over every reachable position.
//!
//! The 3x3 game tree is small enough to enumerate outright, so these
//! tests walk every legal move sequence instead of sampling.

use tactoe_core::rules::{check_winner, has_won, is_draw};
use tactoe_core::{Board, Player, Position, Square};

/// Recursively plays every legal continuation, asserting invariants at
/// each node. Expansion stops at terminal positions.
fn walk(board: &mut Board, to_move: Player, visited: &mut u64) {
    *visited += 1;

    assert!(
        !(has_won(board, Player::X) && has_won(board, Player::O)),
        "both players hold a winning line:\n{board}"
    );

    let terminal = check_winner(board).is_some() || board.is_full();
    if terminal {
        let outcomes = [
            has_won(board, Player::X),
            has_won(board, Player::O),
            is_draw(board),
        ];
        assert_eq!(
            outcomes.iter().filter(|o| **o).count(),
            1,
            "terminal board must be exactly one of won-by-X, won-by-O, draw:\n{board}"
        );
        return;
    }

    for pos in Position::ALL {
        if board.is_empty(pos) {
            board.set(pos, Square::Occupied(to_move));
            walk(board, to_move.opponent(), visited);
            board.set(pos, Square::Empty);
        }
    }
}

#[test]
fn winners_are_mutually_exclusive_and_terminal_boards_are_trichotomous() {
    // Either mark can open, depending on which the human picked.
    for first in [Player::X, Player::O] {
        let mut board = Board::new();
        let mut visited = 0u64;
        walk(&mut board, first, &mut visited);
        assert!(visited > 100_000, "walk should cover the full game tree");
    }
}

#[test]
fn non_terminal_boards_keep_mark_counts_within_one() {
    fn check(board: &mut Board, to_move: Player) {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(
            x.abs_diff(o) <= 1,
            "turns must alternate strictly:\n{board}"
        );
        if check_winner(board).is_some() || board.is_full() {
            return;
        }
        for pos in Position::ALL {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(to_move));
                check(board, to_move.opponent());
                board.set(pos, Square::Empty);
            }
        }
    }

    check(&mut Board::new(), Player::X);
}
