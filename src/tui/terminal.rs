//! Terminal setup and teardown
//!
//! Handles initializing and restoring the terminal state, including the
//! panic hook that restores the terminal on crash, and runs the main
//! event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::services::Tracker;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;
use super::widgets::Notification;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(tracker: Tracker) -> Result<()> {
    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create app state around the loaded tracker
    let mut app = App::new(tracker);

    // Create event handler
    let events = EventHandler::default();

    // Main event loop: every handler runs to completion before the next
    // event; failures surface as toasts, never as loop exits.
    loop {
        terminal.draw(|frame| views::render(frame, &app))?;

        let event = events.next()?;
        if let Err(e) = handle_event(&mut app, event) {
            app.notify(Notification::error(e.to_string()));
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;
    Ok(())
}
