//! Add-income dialog
//!
//! A single amount field. The amount must parse as a non-negative
//! number; a failed parse leaves the form open with the error shown and
//! mutates nothing.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the income dialog
#[derive(Debug, Clone, Default)]
pub struct IncomeFormState {
    /// Amount input
    pub amount: TextInput,
    /// Validation error to display
    pub error: Option<String>,
}

impl IncomeFormState {
    pub fn new() -> Self {
        Self {
            amount: TextInput::new().label("Amount").placeholder("Enter income"),
            error: None,
        }
    }

    /// Reset for a fresh dialog open
    pub fn reset(&mut self) {
        self.amount.clear();
        self.amount.focused = true;
        self.error = None;
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Income ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacing
            Constraint::Length(1), // amount input
            Constraint::Length(1), // spacing
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    frame.render_widget(&app.income_form.amount, rows[1]);

    if let Some(ref error) = app.income_form.error {
        let line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), rows[3]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[4]);
}
