//! Pure tic-tac-toe game logic with perfect-play search.
//!
//! This crate holds everything that is not presentation: the board
//! representation, the win/draw rules, the minimax search engine, and
//! the session controller that sequences human and computer turns.
//! Frontends render board snapshots and forward input; they never
//! mutate game state directly.
//!
//! # Example
//!
//! ```
//! use tactoe_core::{GameSession, Player};
//!
//! let mut session = GameSession::new(Player::X);
//! // Human plays the top-left corner; the computer replies on the
//! // same call.
//! let result = session.submit_human_move(0, 0).expect("cell is empty");
//! assert!(result.outcome.is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use error::GameError;
pub use position::Position;
pub use session::{GameSession, MoveResult, Outcome, TurnState};
pub use types::{Board, Player, Square};
