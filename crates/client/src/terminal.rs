//! Terminal ownership for the wheel client.
//!
//! The wheel is drawn on the alternate screen with the cursor hidden, and raw
//! mode lets the digit keys reach the input reader without Enter. Logs go to a
//! file so they never tear the frame.
use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into wheel mode and wraps stdout in a ratatui backend.
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Leaves wheel mode; safe to call more than once.
pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal when dropped, including on early returns and panics
/// that unwind through `main`.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}
