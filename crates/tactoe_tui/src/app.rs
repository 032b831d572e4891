//! Application state and key handling.

use crossterm::event::KeyCode;
use tactoe_core::{GameSession, Outcome, Player, Position};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

/// Main application state: the session, a cursor, and a status line.
pub struct App {
    session: GameSession,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates the application with the human playing `human`.
    pub fn new(human: Player) -> Self {
        Self {
            session: GameSession::new(human),
            cursor: Position::Center,
            status: format!(
                "You play {human}. Arrows move, Enter or 1-9 places a mark, q quits."
            ),
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.acknowledge(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = crate::input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor),
            KeyCode::Char(c) => {
                // Digits 1-9 address squares directly, phone-pad style
                // (1 = top-left, row-major).
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.cursor = pos;
                    self.submit(pos);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    /// Submits the human's move and updates the status line from the
    /// result. Rejections leave the session untouched.
    fn submit(&mut self, pos: Position) {
        debug!(position = %pos, "submitting move");
        match self.session.submit_human_move(pos.row(), pos.col()) {
            Ok(result) => {
                self.status = match result.outcome {
                    Some(Outcome::Won(winner)) if winner == self.session.human() => {
                        "You win! Press r for a new game, q to quit.".to_string()
                    }
                    Some(Outcome::Won(_)) => {
                        "The computer wins. Press r for a new game, q to quit.".to_string()
                    }
                    Some(Outcome::Draw) => {
                        "Draw. Press r for a new game, q to quit.".to_string()
                    }
                    None => "Your move.".to_string(),
                };
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Acknowledges a finished game and starts a fresh one with the
    /// same mark assignment. Ignored while a game is in progress.
    fn acknowledge(&mut self) {
        if self.session.is_finished() {
            self.session.reset();
            self.cursor = Position::Center;
            self.status = "New game. Your move.".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactoe_core::TurnState;

    #[test]
    fn q_quits() {
        let mut app = App::new(Player::X);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }

    #[test]
    fn enter_places_at_the_cursor() {
        let mut app = App::new(Player::X);
        assert_eq!(app.handle_key(KeyCode::Enter), Control::Continue);
        assert!(!app.session().board().is_empty(Position::Center));
    }

    #[test]
    fn digit_keys_address_squares_directly() {
        let mut app = App::new(Player::X);
        app.handle_key(KeyCode::Char('1'));
        assert!(!app.session().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn restart_is_ignored_mid_game() {
        let mut app = App::new(Player::X);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.session().state(), TurnState::AwaitingHumanMove);
        assert!(!app.session().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn rejected_move_updates_the_status_line() {
        let mut app = App::new(Player::X);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));
        assert!(app.status().contains("occupied"));
    }
}
