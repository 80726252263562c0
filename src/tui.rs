//! Terminal setup and teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{AppError, Result};

/// The terminal type used by the application.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode and the alternate screen.
pub fn init() -> Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("enable raw mode: {e}")))?;
    execute!(io::stdout(), EnterAlternateScreen)
        .map_err(|e| AppError::terminal(format!("enter alternate screen: {e}")))?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| AppError::terminal(format!("create terminal: {e}")))
}

/// Leave the alternate screen and raw mode.
pub fn restore() -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(format!("disable raw mode: {e}")))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(format!("leave alternate screen: {e}")))?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed, so the
/// message is readable and the shell is usable afterwards.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
