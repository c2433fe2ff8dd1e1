//! Game progress: board snapshots, step pointer and turn order.

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::calculate_winner;
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use std::iter::Enumerate;
use std::slice;
use tracing::{debug, instrument, warn};

/// One recorded snapshot: the board right after a play and where it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    squares: Board,
    position: Option<Position>,
}

impl Move {
    /// The empty board every game starts from.
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            position: None,
        }
    }

    /// A snapshot produced by playing at `position`.
    pub fn played(squares: Board, position: Position) -> Self {
        Self {
            squares,
            position: Some(position),
        }
    }

    /// Board after this move.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// Where the move was played; `None` for the game start.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Authoritative state of a game.
///
/// Transitions consume the state and return the next one. A rejected
/// play returns the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<Move>,
    step_number: usize,
    x_is_next: bool,
    sort_ascending: bool,
}

impl GameState {
    /// Creates a new game with history listed oldest first.
    pub fn new() -> Self {
        Self::with_sort(true)
    }

    /// Creates a new game with the given history order.
    pub fn with_sort(sort_ascending: bool) -> Self {
        Self {
            history: vec![Move::start()],
            step_number: 0,
            x_is_next: true,
            sort_ascending,
        }
    }

    /// Places the next mark at `cell`.
    ///
    /// Plays on an occupied cell, or on a board that already has a winner,
    /// are ignored. A play made after jumping back discards every snapshot
    /// past the current step.
    #[must_use]
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn play(mut self, cell: Position) -> Self {
        let current = *self.current_board();
        if let Some(winner) = calculate_winner(&current) {
            debug!(%winner, "Ignoring play on a won board");
            return self;
        }
        if !current.is_empty(cell) {
            debug!(?cell, "Ignoring play on an occupied square");
            return self;
        }

        let mark = self.next_mark();
        let mut squares = current;
        squares.set(cell, Square::Occupied(mark));

        self.history.truncate(self.step_number + 1);
        self.history.push(Move::played(squares, cell));
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        debug!(%mark, cell = cell.label(), step = self.step_number, "Move played");

        self.debug_check();
        self
    }

    /// [`play`](Self::play) for callers holding a raw cell index.
    ///
    /// Indices above 8 are a caller bug: debug builds panic, release
    /// builds log and leave the state alone.
    #[must_use]
    pub fn play_index(self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(cell) => self.play(cell),
            None => {
                debug_assert!(index < 9, "cell index {index} out of range 0..9");
                warn!(index, "Ignoring play outside the board");
                self
            }
        }
    }

    /// Moves the current view to `step` without touching history.
    ///
    /// `step` must be below `history().len()`; debug builds panic otherwise,
    /// release builds log and leave the state alone.
    #[must_use]
    #[instrument(skip(self), fields(from = self.step_number, len = self.history.len()))]
    pub fn jump_to(mut self, step: usize) -> Self {
        debug_assert!(
            step < self.history.len(),
            "step {step} outside history of length {}",
            self.history.len()
        );
        if step >= self.history.len() {
            warn!(step, "Ignoring jump outside history");
            return self;
        }

        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped");

        self.debug_check();
        self
    }

    /// Flips the order history is listed in.
    #[must_use]
    pub fn toggle_sort(mut self) -> Self {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "Sort order toggled");
        self
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number].squares
    }

    /// History in display order, paired with each entry's move number.
    ///
    /// Move numbers are chronological indices whichever way the list is
    /// sorted, so they are what jump targets should use.
    pub fn display_order(&self) -> DisplayOrder<'_> {
        DisplayOrder {
            inner: self.history.iter().enumerate(),
            ascending: self.sort_ascending,
        }
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self.current_board())
    }

    /// Mark that plays next.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// Every recorded snapshot, game start first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X plays next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when history is listed oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            panic!("game state invariants violated: {violations:?}");
        }
    }

    /// Assembles a state without validation, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_parts(
        history: Vec<Move>,
        step_number: usize,
        x_is_next: bool,
        sort_ascending: bool,
    ) -> Self {
        Self {
            history,
            step_number,
            x_is_next,
            sort_ascending,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over `(move_number, &Move)` in display order.
#[derive(Debug, Clone)]
pub struct DisplayOrder<'a> {
    inner: Enumerate<slice::Iter<'a, Move>>,
    ascending: bool,
}

impl<'a> Iterator for DisplayOrder<'a> {
    type Item = (usize, &'a Move);

    fn next(&mut self) -> Option<Self::Item> {
        if self.ascending {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DisplayOrder<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> GameState {
        cells
            .iter()
            .fold(GameState::new(), |state, &i| state.play_index(i))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert!(state.sort_ascending());
        assert!(state.current_board().is_clear());
        assert_eq!(state.history()[0].position(), None);
    }

    #[test]
    fn test_play_places_mark_and_flips_turn() {
        let state = GameState::new().play(Position::Center);
        assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 1);
        assert!(!state.x_is_next());
        assert_eq!(state.history()[1].position(), Some(Position::Center));
    }

    #[test]
    fn test_play_on_occupied_square_is_noop() {
        let state = played(&[4]);
        let again = state.clone().play(Position::Center);
        assert_eq!(again, state);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let won = played(&[0, 4, 1, 8, 2]);
        assert_eq!(won.winner(), Some(Mark::X));
        assert_eq!(won.clone().play_index(3), won);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let state = played(&[0, 4, 1]).jump_to(1).play_index(8);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.step_number(), 2);
        assert_eq!(state.current_board().get(Position::BottomRight), Square::Occupied(Mark::O));
        assert!(state.current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_rejected_play_after_jump_keeps_future() {
        let state = played(&[0, 4, 1]).jump_to(1);
        let same = state.clone().play_index(0);
        assert_eq!(same.history().len(), 4);
        assert_eq!(same, state);
    }

    #[test]
    fn test_jump_to_keeps_history() {
        let state = played(&[0, 4, 1]);
        let history = state.history().to_vec();
        let back = state.jump_to(0);
        assert_eq!(back.history(), history.as_slice());
        assert!(back.current_board().is_clear());
        assert!(back.x_is_next());

        let forward = back.jump_to(3);
        assert!(!forward.x_is_next());
        assert_eq!(forward.current_board().occupied(), 3);
    }

    #[test]
    fn test_toggle_sort_twice_is_identity() {
        let state = played(&[0, 4]);
        let toggled = state.clone().toggle_sort();
        assert!(!toggled.sort_ascending());
        assert_eq!(toggled.clone().toggle_sort(), state);
    }

    #[test]
    fn test_display_order_descending_keeps_move_numbers() {
        let state = played(&[0, 4, 1]).toggle_sort();
        let numbers: Vec<usize> = state.display_order().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![3, 2, 1, 0]);
        let (_, latest) = state.display_order().next().unwrap();
        assert_eq!(latest.position(), Some(Position::TopCenter));
        assert_eq!(state.display_order().len(), 4);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside history")]
    fn test_jump_out_of_range_panics_in_debug() {
        let _ = GameState::new().jump_to(1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn test_play_index_out_of_range_panics_in_debug() {
        let _ = GameState::new().play_index(9);
    }
}
