//! Action menu view
//!
//! The list of tracker actions; Enter activates the selected one.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::app::{App, MenuAction};

/// Render the action menu
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let selected = idx == app.selected_action;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(action.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Actions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(list, area);
}
