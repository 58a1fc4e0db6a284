use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub mod app;
pub mod form;
pub mod results;
pub mod state;
pub mod view;

pub use app::{App, Focus, SearchOutcome};

/// How long to wait for input before applying finished searches
const TICK: Duration = Duration::from_millis(100);

/// Restores the terminal on drop, on every exit path including errors
struct TerminalRestore;

impl TerminalRestore {
    /// Switches the terminal into raw mode, the alternate screen, and mouse
    /// capture. The guard exists as soon as raw mode is on, so a failure
    /// further in still leaves a usable shell.
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalRestore {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Runs the interactive front end until the user quits
///
/// Must be called from within a Tokio runtime: searches run on spawned tasks
/// and are folded back into the app between input polls.
pub fn run(app: &mut App) -> anyhow::Result<()> {
    let _restore = TerminalRestore::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK)? {
            let event = event::read()?;
            app.handle_event(&event);
        }
        app.poll();
    }

    tracing::info!("Front end closed");
    Ok(())
}
