//! Status bar view
//!
//! Key hints for the current mode.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.has_dialog() {
        " Esc:Cancel  Enter:Confirm "
    } else {
        " q:Quit  j/k:Navigate  Enter:Select "
    };

    let line = Line::from(Span::styled(hints, Style::default().fg(Color::White)));
    frame.render_widget(Paragraph::new(line), area);
}
