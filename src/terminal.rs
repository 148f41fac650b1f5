//! Raw-mode terminal setup with guaranteed restore.

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io;
use tracing::warn;

/// Runs its restore hook exactly once when dropped.
pub struct TerminalGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> TerminalGuard<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    if let Err(e) = io::stdout().execute(LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
}

/// Enable raw mode and the alternate screen. The returned guard undoes both,
/// including when a later setup step fails.
pub fn enter_terminal() -> io::Result<TerminalGuard<impl FnMut()>> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    io::stdout().execute(EnterAlternateScreen)?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup(fail_after_guard: bool, restored: &Cell<u32>) -> io::Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        if fail_after_guard {
            return Err(io::Error::new(io::ErrorKind::Other, "no terminal"));
        }
        Ok(())
    }

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(setup(true, &restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_once_on_normal_exit() {
        let restored = Cell::new(0);
        assert!(setup(false, &restored).is_ok());
        assert_eq!(restored.get(), 1);
    }
}
