//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating game state. Rules are separated from
//! board storage so the controller and the search engine share one
//! evaluator. Win detection takes precedence over draw detection
//! everywhere: a full board with a winning line is a win, never a draw.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_won};
