//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen outlive the process if nobody turns
//! them off, so teardown is owned by a guard that also runs on early
//! returns and panics.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs `restore` exactly once: through [`finish`](Self::finish), or on drop.
pub(crate) struct RestoreGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    restore: Option<F>,
}

impl<F> RestoreGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    pub(crate) fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and reports the outcome.
    pub(crate) fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F> Drop for RestoreGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal on unwind");
            if let Err(err) = restore() {
                warn!(error = %err, "Failed to restore terminal");
            }
        }
    }
}

/// Puts the terminal into game mode and returns the guard that undoes it.
pub(crate) fn enter() -> Result<RestoreGuard<fn() -> io::Result<()>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore as fn() -> io::Result<()>);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Ok(guard)
}

/// Undoes [`enter`]; every step is attempted even if an earlier one fails.
fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Combines the game loop's outcome with the teardown's.
///
/// A loop error wins; a teardown error is only surfaced when the loop
/// itself succeeded.
pub(crate) fn finish_session(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            warn!(error = %restore_err, "Failed to restore terminal after loop error");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_restores_on_drop() {
        let calls = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| {
                calls.set(calls.get() + 1);
                Ok(())
            });
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        let calls = Cell::new(0);
        let setup = || -> Result<()> {
            let _guard = RestoreGuard::new(|| {
                calls.set(calls.get() + 1);
                Ok(())
            });
            anyhow::bail!("backend failed");
        };
        assert!(setup().is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_finish_restores_once() {
        let calls = Cell::new(0);
        let guard = RestoreGuard::new(|| {
            calls.set(calls.get() + 1);
            Err(io::Error::other("tty gone"))
        });
        assert!(guard.finish().is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let res = finish_session(
            Err(anyhow::anyhow!("event read failed")),
            Err(io::Error::other("tty gone")),
        );
        assert_eq!(res.unwrap_err().to_string(), "event read failed");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_loop() {
        let res = finish_session(Ok(()), Err(io::Error::other("tty gone")));
        assert_eq!(res.unwrap_err().to_string(), "Failed to restore terminal");
    }

    #[test]
    fn test_clean_session() {
        assert!(finish_session(Ok(()), Ok(())).is_ok());
    }
}
