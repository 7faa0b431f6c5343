//! Full-screen terminal form built on ratatui.
//!
//! - [`state`]: input buffer, session and key handling, no terminal access
//! - [`view`]: stateless drawing of a [`FormState`]
//!
//! [`run`] owns the terminal: it switches to the alternate screen, loops over
//! key events until the user quits, and restores the terminal on every exit path.

pub mod state;
pub mod view;

pub use state::{FormAction, FormState, StatusKind, StatusLine};

use crate::core::Storage;
use crate::utils::error::{ReverserError, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub fn run<S: Storage>(state: &mut FormState<S>) -> Result<()> {
    let guard = TerminalGuard::enter().map_err(ReverserError::TerminalError)?;

    tracing::info!("Starting interactive form");
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .and_then(|mut terminal| event_loop(&mut terminal, state));

    guard.restore().map_err(ReverserError::TerminalError)?;
    result.map_err(ReverserError::TerminalError)
}

fn event_loop<S: Storage>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut FormState<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, state))?;

        if let Event::Key(key) = event::read()? {
            if state.handle_key(key) == FormAction::Quit {
                tracing::info!("Form closed by user");
                return Ok(());
            }
        }
    }
}

/// Raw mode plus alternate screen; restored on drop if not restored explicitly.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::warn!("failed to restore terminal: {}", e);
            }
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    // 每一步都要執行，錯誤留到最後回報
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen),
        execute!(io::stdout(), Show),
    ])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}
