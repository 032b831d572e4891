//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tactoe_core::Position;

/// Moves the cursor one square in the direction of an arrow key,
/// staying on the board. Other keys leave the cursor in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    // Clamped coordinates are always on the board.
    Position::from_row_col(row, col).unwrap_or(cursor)
}
