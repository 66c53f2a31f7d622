//! Summary panel view
//!
//! A derived projection of the ledger totals, recomputed on every draw
//! so it stays live after each mutating action.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.tracker.summary();

    let savings_color = if summary.savings < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(""),
        row("Income", summary.income, Color::White),
        row("Expenses", summary.total_expenses, Color::White),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<10}", "Savings"), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:.2}", summary.savings),
                Style::default()
                    .fg(savings_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} expense(s) recorded", app.tracker.ledger().expenses.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(paragraph, area);
}

fn row(label: &str, value: f64, value_color: Color) -> Line<'_> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:.2}", value), Style::default().fg(value_color)),
    ])
}
