//! Terminal User Interface module
//!
//! Provides the interactive surface for tally using ratatui: an action
//! menu, a live summary panel, input dialogs for the three data-entry
//! actions, toast notifications, and a modal chart overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
