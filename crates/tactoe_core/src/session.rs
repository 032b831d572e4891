//! Game session controller: turn sequencing for human versus computer.
//!
//! The session owns the board for the duration of a game and is the
//! only component that mutates it outside the search's probe/undo.
//! One call to [`GameSession::submit_human_move`] runs a full ply
//! pair: the human's mark, the win/draw check, and — if the game
//! continues — the computer's reply, searched synchronously on the
//! caller's thread.

use crate::error::GameError;
use crate::position::Position;
use crate::rules::{check_winner, has_won, is_full};
use crate::search;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whose turn it is, or how the game ended.
///
/// `Won` and `Draw` are terminal and mutually exclusive; the win check
/// always runs before the draw check, so a full board with a winning
/// line reports `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The human is expected to submit a move.
    AwaitingHumanMove,
    /// The computer is about to reply (transient within a submit call).
    ComputerToMove,
    /// The given player completed a line.
    Won(Player),
    /// The board filled with no winner.
    Draw,
}

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The given player won.
    Won(Player),
    /// Neither player won.
    Draw,
}

/// Result of an accepted human move.
///
/// Carries the board as it stands after the full ply pair (human move
/// plus any computer reply) and the outcome if the game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Snapshot of the board after the move(s).
    pub board: Board,
    /// `Some` when the game reached a terminal state.
    pub outcome: Option<Outcome>,
}

/// A human-versus-computer game session.
///
/// Created with the human's chosen mark; the computer plays the
/// complement. The human moves first regardless of mark, matching the
/// click-driven original. After a terminal outcome the session stays
/// frozen until [`GameSession::reset`] acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    human: Player,
    computer: Player,
    state: TurnState,
}

impl GameSession {
    /// Starts a session with the human playing the given mark.
    #[instrument]
    pub fn new(human: Player) -> Self {
        info!(human = %human, computer = %human.opponent(), "starting session");
        Self {
            board: Board::new(),
            human,
            computer: human.opponent(),
            state: TurnState::AwaitingHumanMove,
        }
    }

    /// Resumes a session from a known position.
    ///
    /// The turn state is derived from the board: a winning line or a
    /// full board makes the session terminal, anything else awaits the
    /// human's move.
    pub fn with_board(board: Board, human: Player) -> Self {
        let state = match check_winner(&board) {
            Some(winner) => TurnState::Won(winner),
            None if is_full(&board) => TurnState::Draw,
            None => TurnState::AwaitingHumanMove,
        };
        Self {
            board,
            human,
            computer: human.opponent(),
            state,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns `true` once the game has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Won(_) | TurnState::Draw)
    }

    /// Submits the human's move at `(row, col)` and, if the game
    /// continues, plays the computer's reply on the same call.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotAwaitingMove`] when the session is not in
    ///   [`TurnState::AwaitingHumanMove`].
    /// - [`GameError::OutOfBounds`] when a coordinate falls outside
    ///   `[0, 3)`.
    /// - [`GameError::SquareOccupied`] when the square is taken.
    ///
    /// A rejected move mutates nothing: board and turn state are
    /// exactly as before the call.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<MoveResult, GameError> {
        if self.state != TurnState::AwaitingHumanMove {
            warn!(state = ?self.state, "move submitted out of turn");
            return Err(GameError::NotAwaitingMove);
        }

        let pos = Position::from_row_col(row, col).ok_or(GameError::OutOfBounds(row, col))?;
        self.board.place(pos, self.human)?;
        debug!(position = %pos, "human move accepted");

        if has_won(&self.board, self.human) {
            self.state = TurnState::Won(self.human);
            return Ok(self.move_result(Some(Outcome::Won(self.human))));
        }
        if is_full(&self.board) {
            self.state = TurnState::Draw;
            return Ok(self.move_result(Some(Outcome::Draw)));
        }

        self.state = TurnState::ComputerToMove;
        let outcome = self.computer_reply()?;
        Ok(self.move_result(outcome))
    }

    /// Re-initializes the board, preserving the mark assignment.
    ///
    /// The presentation layer calls this after a terminal outcome has
    /// been acknowledged; it is also how a game is abandoned mid-way.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting session");
        self.board = Board::new();
        self.state = TurnState::AwaitingHumanMove;
    }

    /// Searches for and plays the computer's move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardFull`] if the search finds no empty
    /// square — unreachable through `submit_human_move`, which detects
    /// the draw first.
    fn computer_reply(&mut self) -> Result<Option<Outcome>, GameError> {
        let pos = search::best_move(&mut self.board, self.computer).ok_or(GameError::BoardFull)?;
        self.board.place(pos, self.computer)?;
        debug!(position = %pos, "computer move played");

        if has_won(&self.board, self.computer) {
            self.state = TurnState::Won(self.computer);
            return Ok(Some(Outcome::Won(self.computer)));
        }
        if is_full(&self.board) {
            self.state = TurnState::Draw;
            return Ok(Some(Outcome::Draw));
        }

        self.state = TurnState::AwaitingHumanMove;
        Ok(None)
    }

    fn move_result(&self, outcome: Option<Outcome>) -> MoveResult {
        MoveResult {
            board: self.board.clone(),
            outcome,
        }
    }
}
