//! Terminal UI: the rendering side of the game.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{Action, App, Focus};
pub use input::{ClickTarget, click_target, digit_cell, move_cursor};
pub use ui::{ScreenLayout, cell_text, draw};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::TuiConfig;

/// Runs the interactive game until the user quits.
pub fn run(config: TuiConfig) -> Result<()> {
    // Logs go to a file so they don't interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting tic-tac-toe TUI");

    let mut app = App::new(config);
    let guard = terminal::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut term| run_loop(&mut term, &mut app));
    let res = terminal::finish_session(res, guard.finish());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(steps = app.game().history().len(), "TUI closed");
    res
}

/// One event, one transition, one redraw.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut layout = ScreenLayout::default();

    while !app.should_quit() {
        terminal.draw(|frame| layout = draw(frame, app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }

    Ok(())
}
