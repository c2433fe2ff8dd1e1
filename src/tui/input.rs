//! Keyboard and mouse mapping.

use super::ui::ScreenLayout;
use crate::game::Position;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Moves the board cursor with arrow keys or `hjkl`; edges don't wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.col(), cursor.row());
    let (col, row) = match key {
        KeyCode::Left | KeyCode::Char('h') => (col.saturating_sub(1), row),
        KeyCode::Right | KeyCode::Char('l') => (col + 1, row),
        KeyCode::Up | KeyCode::Char('k') => (col, row.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => (col, row + 1),
        _ => return cursor,
    };
    Position::from_coordinates(col, row).unwrap_or(cursor)
}

/// Cell for a digit key, `1` being the top-left square.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

/// What a left click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// The sort toggle.
    Sort,
    /// A history row in display order, scroll offset included.
    HistoryRow(usize),
}

/// Resolves a mouse event against the last drawn layout.
pub fn click_target(event: MouseEvent, layout: &ScreenLayout) -> Option<ClickTarget> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (x, y) = (event.column, event.row);

    if let Some(i) = layout.cells.iter().position(|r| contains(*r, x, y)) {
        return Position::from_index(i).map(ClickTarget::Cell);
    }
    if contains(layout.sort, x, y) {
        return Some(ClickTarget::Sort);
    }
    if contains(layout.history_rows, x, y) {
        let row = layout.history_offset + usize::from(y - layout.history_rows.y);
        return Some(ClickTarget::HistoryRow(row));
    }
    None
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
