//! Scripted games: apply a list of cell indices to a fresh board.

use super::{GameState, Position};
use tracing::{debug, instrument};

/// Error from replaying a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {} is outside the board (0-8)", _0)]
    CellOutOfRange(u8),

    /// A jump past the end of history.
    #[display("Cannot jump to step {step}: history has {len} entries")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length after the replay.
        len: usize,
    },
}

impl std::error::Error for ReplayError {}

/// Plays `cells` in order on a fresh game, then optionally jumps to `jump`.
///
/// Plays the game itself ignores (occupied squares, moves after a win) are
/// ignored here too; only indices the game cannot represent are errors.
#[instrument]
pub fn replay(
    cells: &[u8],
    jump: Option<usize>,
    sort_ascending: bool,
) -> Result<GameState, ReplayError> {
    let mut game = GameState::with_sort(sort_ascending);
    for &cell in cells {
        let pos = Position::from_index(usize::from(cell))
            .ok_or(ReplayError::CellOutOfRange(cell))?;
        game = game.play(pos);
    }
    debug!(steps = game.history().len(), "Replay finished");

    if let Some(step) = jump {
        let len = game.history().len();
        if step >= len {
            return Err(ReplayError::StepOutOfRange { step, len });
        }
        game = game.jump_to(step);
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_is_a_new_game() {
        assert_eq!(replay(&[], None, true), Ok(GameState::new()));
    }

    #[test]
    fn test_ignored_plays_are_not_errors() {
        let game = replay(&[4, 4, 0], None, true).unwrap();
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_cell_out_of_range() {
        assert_eq!(replay(&[0, 9], None, true), Err(ReplayError::CellOutOfRange(9)));
    }
}
