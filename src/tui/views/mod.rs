//! Top-level rendering for the TUI
//!
//! Draws the base screen (menu, summary, status bar), then any active
//! dialog, then the current toast notification on top.

pub mod chart;
pub mod menu;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::notification::NotificationWidget;

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    menu::render(frame, app, layout.menu);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Income => dialogs::income::render(frame, app),
        ActiveDialog::Expense => dialogs::expense::render(frame, app),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::Chart(data) => chart::render(frame, data),
    }

    if let Some(notification) = app.notifications.current() {
        let area = centered_rect_fixed(50, 5, frame.area());
        // Anchor the toast near the bottom of the screen
        let area = ratatui::layout::Rect {
            y: frame
                .area()
                .height
                .saturating_sub(area.height.saturating_add(1)),
            ..area
        };
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
