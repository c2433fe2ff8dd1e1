//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game**: board, win detection and [`GameState`], a value whose
//!   transitions (`play`, `jump_to`, `toggle_sort`) return the next state
//! - **View**: [`GameView`] turns a state into status text and history labels
//! - **TUI**: ratatui front end that feeds clicks and keys into the game
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, GameView, Mark, Position};
//!
//! let game = GameState::new()
//!     .play(Position::TopLeft)
//!     .play(Position::Center)
//!     .play(Position::TopCenter)
//!     .play(Position::BottomRight)
//!     .play(Position::TopRight);
//! assert_eq!(game.winner(), Some(Mark::X));
//! assert_eq!(GameView::new(&game).status(), "Winner: X");
//!
//! let rewound = game.jump_to(0);
//! assert!(rewound.current_board().is_clear());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod game;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};

// Crate-level exports - Game types
pub use game::{
    Board, DisplayOrder, GameState, GameView, HistoryEntry, Mark, Move, Position, ReplayError,
    Square, calculate_winner, replay, winning_line,
};
