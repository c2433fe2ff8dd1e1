//! Render-ready projection of a [`GameState`].
//!
//! Everything a front end draws comes from here, so the terminal UI and the
//! headless `replay` command print the same status and labels.

use super::rules::winning_line;
use super::{Board, GameState, Move, Position};
use derive_getters::Getters;
use serde::Serialize;

/// One history button.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct HistoryEntry {
    /// Chronological index into history; the jump target.
    move_number: usize,
    /// Button text.
    label: String,
    /// True for the snapshot currently shown.
    is_current: bool,
}

/// Everything needed to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// `Winner: <mark>` or `Next player: <mark>`.
    status: String,
    /// History buttons in display order.
    history: Vec<HistoryEntry>,
    /// Completed line on the current board, if any.
    winning_line: Option<[Position; 3]>,
    /// True when every square is filled.
    board_full: bool,
}

impl GameView {
    /// Projects `state` into render-ready values.
    pub fn new(state: &GameState) -> Self {
        let board = *state.current_board();
        Self {
            board,
            status: status(state),
            history: history_entries(state),
            winning_line: winning_line(&board),
            board_full: board.is_full(),
        }
    }

    /// Display row of the entry flagged current.
    pub fn current_row(&self) -> Option<usize> {
        self.history.iter().position(|entry| entry.is_current)
    }

    /// Plain-text rendering: board, status, then one label per line with
    /// `>` marking the current entry.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board.display(), self.status);
        for entry in &self.history {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("\n{marker} {}", entry.label));
        }
        out.push('\n');
        out
    }
}

/// Status line for the current board.
pub fn status(state: &GameState) -> String {
    match state.winner() {
        Some(winner) => format!("Winner: {winner}"),
        None => format!("Next player: {}", state.next_mark()),
    }
}

/// Button text for the history entry with the given move number.
pub fn move_label(move_number: usize, mv: &Move) -> String {
    match mv.position() {
        Some(pos) if move_number > 0 => {
            format!("Go to move #{move_number} ({},{})", pos.col(), pos.row())
        }
        _ => "Go to game start".to_string(),
    }
}

/// History buttons in display order.
pub fn history_entries(state: &GameState) -> Vec<HistoryEntry> {
    state
        .display_order()
        .map(|(move_number, mv)| HistoryEntry {
            move_number,
            label: move_label(move_number, mv),
            is_current: move_number == state.step_number(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> GameState {
        cells
            .iter()
            .fold(GameState::new(), |state, &i| state.play_index(i))
    }

    #[test]
    fn test_status_for_new_game() {
        assert_eq!(status(&GameState::new()), "Next player: X");
    }

    #[test]
    fn test_status_reports_winner() {
        assert_eq!(status(&played(&[0, 4, 1, 8, 2])), "Winner: X");
    }

    #[test]
    fn test_labels_use_col_row() {
        let state = played(&[5, 6]);
        let labels: Vec<String> = history_entries(&state)
            .into_iter()
            .map(|e| e.label().clone())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (3,2)".to_string(),
                "Go to move #2 (1,3)".to_string(),
            ]
        );
    }

    #[test]
    fn test_current_entry_follows_step_not_row() {
        let state = played(&[0, 4, 1]).jump_to(1).toggle_sort();
        let entries = history_entries(&state);
        assert_eq!(*entries[0].move_number(), 3);
        let current: Vec<usize> = entries
            .iter()
            .filter(|e| *e.is_current())
            .map(|e| *e.move_number())
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(GameView::new(&state).current_row(), Some(2));
    }

    #[test]
    fn test_view_highlights_winning_line() {
        let view = GameView::new(&played(&[0, 4, 1, 8, 2]));
        assert_eq!(
            *view.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(!view.board_full());
    }

    #[test]
    fn test_render_text() {
        let text = GameView::new(&played(&[4])).render_text();
        assert_eq!(
            text,
            "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nNext player: O\n\n  Go to game start\n> Go to move #1 (2,2)\n"
        );
    }
}
