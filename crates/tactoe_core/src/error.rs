//! Error types for the game core.

use crate::position::Position;

/// Errors reported when a move is rejected or a caller contract is
/// violated.
///
/// Rejections never mutate board or turn state; callers may simply
/// report them and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates fall outside the 3x3 board.
    #[display("coordinates ({}, {}) are outside the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// A human move was submitted while the session was not awaiting
    /// one (the computer is to move, or the game has finished).
    #[display("no human move is expected in the current state")]
    NotAwaitingMove,

    /// Move search was requested on a board with no empty square.
    #[display("cannot search for a move on a full board")]
    BoardFull,
}

impl std::error::Error for GameError {}
