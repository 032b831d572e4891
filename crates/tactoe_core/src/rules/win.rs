//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds a complete line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks if the given player holds a complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    check_winner(board) == Some(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_winner_on_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn winner_top_row() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Player::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn winner_left_column() {
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.place(pos, Player::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn winner_anti_diagonal() {
        let mut board = Board::new();
        for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
            board.place(pos, Player::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn no_winner_on_incomplete_line() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
