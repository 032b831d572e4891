//! Minimax move selection with alpha-beta pruning.
//!
//! The engine searches the full game tree: recursion depth is bounded
//! by the number of empty squares (at most 9), so no explicit depth
//! limit is needed. Positions are probed in place on an exclusively
//! borrowed board — place a mark, recurse, undo — and pruning never
//! changes the chosen move, only the amount of work.
//!
//! Terminal leaves score `10 - depth` when the computer has won,
//! `depth - 10` when the human has won, and `0` on a draw, with depth
//! counted from the position handed to [`best_move`]. Scoring against
//! depth biases the engine toward faster wins and slower losses.

use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Player, Square};
use tracing::debug;

/// Score of an immediate win, before the depth penalty.
const WIN: i32 = 10;

/// Alpha-beta bounds sit just outside the reachable score range.
const INF: i32 = WIN + 1;

/// Scores the position if it is terminal, `None` otherwise.
///
/// Checked before any expansion, so a position that is already decided
/// scores at the current depth without placing a mark.
fn score_terminal(board: &Board, computer: Player, depth: i32) -> Option<i32> {
    match check_winner(board) {
        Some(winner) if winner == computer => Some(WIN - depth),
        Some(_) => Some(depth - WIN),
        None if is_full(board) => Some(0),
        None => None,
    }
}

/// Recursive minimax evaluation.
///
/// At a maximizing node the computer is to move; at a minimizing node
/// the human is. Empty squares are tried in row-major order, each mark
/// undone after its subtree returns. Remaining siblings are pruned
/// once `beta <= alpha`.
fn minimax(
    board: &mut Board,
    computer: Player,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if let Some(score) = score_terminal(board, computer, depth) {
        return score;
    }

    if maximizing {
        let mut best_score = -INF;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(computer));
            let score = minimax(board, computer, depth + 1, alpha, beta, false);
            board.set(pos, Square::Empty);

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let human = computer.opponent();
        let mut best_score = INF;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(human));
            let score = minimax(board, computer, depth + 1, alpha, beta, true);
            board.set(pos, Square::Empty);

            best_score = best_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}

/// Returns the optimal move for `computer` on the given position,
/// assuming both sides play perfectly.
///
/// Each empty square is probed in row-major order with one ply of
/// minimization below it; the first square with the strictly greatest
/// score wins ties. The board is restored exactly before returning.
///
/// Returns `None` when the board has no empty square — callers guard
/// against invoking the search on a full board.
pub fn best_move(board: &mut Board, computer: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(computer));
        let score = minimax(board, computer, 0, -INF, INF, false);
        board.set(pos, Square::Empty);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "search selected move");
    }
    best.map(|(pos, _)| pos)
}
