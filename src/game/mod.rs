//! Tic-tac-toe game model: board, win detection, history with time travel.

mod invariants;
mod position;
mod replay;
mod rules;
mod state;
mod types;
mod view;

pub use invariants::{
    AlternatingTurn, GameInvariants, InitialBoardEmpty, Invariant, InvariantSet,
    InvariantViolation, SingleCellDelta, StepInBounds,
};
pub use position::Position;
pub use replay::{ReplayError, replay};
pub use rules::{LINES, calculate_winner, winning_line};
pub use state::{DisplayOrder, GameState, Move};
pub use types::{Board, Mark, Square};
pub use view::{GameView, HistoryEntry, history_entries, move_label, status};
