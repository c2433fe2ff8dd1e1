//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use tracing::{debug, info, instrument};

use super::input::{ClickTarget, click_target, digit_cell, move_cursor};
use super::ui::ScreenLayout;
use crate::config::TuiConfig;
use crate::game::{GameState, GameView, Position};

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// A game-level request produced by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// Show the snapshot with this move number.
    JumpTo(usize),
    /// Flip the history order.
    ToggleSort,
    /// Start a fresh game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    config: TuiConfig,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh game.
    pub fn new(config: TuiConfig) -> Self {
        Self {
            game: GameState::with_sort(*config.sort_ascending()),
            config,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Render-ready projection of the current game.
    pub fn view(&self) -> GameView {
        GameView::new(&self.game)
    }

    /// Active configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history row, counted in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.dispatch(Action::Quit),
            KeyCode::Char('r') => self.dispatch(Action::Restart),
            KeyCode::Char('s') => self.dispatch(Action::ToggleSort),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_selection();
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.cursor = cell;
                    self.dispatch(Action::Play(cell));
                    return;
                }
                match self.focus {
                    Focus::Board => self.board_key(code),
                    Focus::History => self.history_key(code),
                }
            }
        }
    }

    fn board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::Play(self.cursor)),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn history_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(step) = self.move_number_at(self.selected) {
                    self.dispatch(Action::JumpTo(step));
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event against the layout of the last frame.
    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &ScreenLayout) {
        let Some(target) = click_target(event, layout) else {
            return;
        };
        debug!(?target, "Click");

        match target {
            ClickTarget::Cell(cell) => {
                self.focus = Focus::Board;
                self.cursor = cell;
                self.dispatch(Action::Play(cell));
            }
            ClickTarget::Sort => self.dispatch(Action::ToggleSort),
            ClickTarget::HistoryRow(row) => {
                if let Some(step) = self.move_number_at(row) {
                    self.focus = Focus::History;
                    self.dispatch(Action::JumpTo(step));
                }
            }
        }
    }

    /// Applies an action to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        let game = std::mem::take(&mut self.game);
        self.game = match action {
            Action::Play(cell) => game.play(cell),
            Action::JumpTo(step) => game.jump_to(step),
            Action::ToggleSort => game.toggle_sort(),
            Action::Restart => {
                info!("Restarting game");
                self.cursor = Position::Center;
                self.focus = Focus::Board;
                GameState::with_sort(*self.config.sort_ascending())
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                game
            }
        };
        self.sync_selection();
    }

    /// Move number shown on the given display row.
    fn move_number_at(&self, row: usize) -> Option<usize> {
        self.game.display_order().nth(row).map(|(step, _)| step)
    }

    /// Points the history selection at the current step.
    fn sync_selection(&mut self) {
        let step = self.game.step_number();
        self.selected = if self.game.sort_ascending() {
            step
        } else {
            self.game.history().len() - 1 - step
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TuiConfig::default())
    }
}
