//! Chart overlay view
//!
//! A modal presentation of spending by category: one row per slice with
//! a proportional bar and the slice's share of the total to one decimal
//! place. The chart has no state of its own and never touches the
//! ledger.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::reports::ChartData;
use crate::tui::layout::centered_rect_fixed;

const BAR_WIDTH: usize = 24;

const SLICE_COLORS: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Render the chart overlay
pub fn render(frame: &mut Frame, data: &ChartData) {
    let height = (data.slices.len() as u16).saturating_add(6);
    let area = centered_rect_fixed(62, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Expenses by Category ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    for (idx, slice) in data.slices.iter().enumerate() {
        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
        let filled = (slice.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{:<14}", slice.label), Style::default().fg(Color::White)),
            Span::styled(
                "█".repeat(filled.min(BAR_WIDTH)),
                Style::default().fg(color),
            ),
            Span::styled(
                "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {:>6}", slice.percentage_label()),
                Style::default().fg(color),
            ),
            Span::styled(
                format!("  {:.2}", slice.total),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Total: {:.2}", data.total),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        " [Esc] Close",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
