//! Set-budget dialog
//!
//! A category picker and a limit amount. On submit the category
//! selection is validated before the amount; either failure leaves the
//! form open and mutates nothing. Setting a limit overwrites any
//! previous value for that category.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{CategorySelect, TextInput};

/// Which field is focused in the budget dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Amount,
}

impl BudgetField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// Category picker, unset until the user chooses
    pub category: CategorySelect,
    /// Limit input
    pub amount: TextInput,
    /// Which field is focused
    pub focused_field: BudgetField,
    /// Validation error to display
    pub error: Option<String>,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            category: CategorySelect::new().label("Category"),
            amount: TextInput::new().label("Limit").placeholder("Enter budget"),
            focused_field: BudgetField::Category,
            error: None,
        }
    }

    /// Reset for a fresh dialog open
    pub fn reset(&mut self) {
        self.category.clear();
        self.amount.clear();
        self.focused_field = BudgetField::Category;
        self.error = None;
        self.sync_focus();
    }

    /// Move to the other field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.category.focused = self.focused_field == BudgetField::Category;
        self.amount.focused = self.focused_field == BudgetField::Amount;
    }

    /// The text input currently focused, if the focus is on one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            BudgetField::Amount => Some(&mut self.amount),
            BudgetField::Category => None,
        }
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacing
            Constraint::Length(1), // category
            Constraint::Length(1), // amount
            Constraint::Length(1), // spacing
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    frame.render_widget(&app.budget_form.category, rows[1]);
    frame.render_widget(&app.budget_form.amount, rows[2]);

    if let Some(ref error) = app.budget_form.error {
        let line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), rows[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next  "),
        Span::styled("[</>]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[5]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_toggle() {
        let mut form = BudgetFormState::new();
        assert_eq!(form.focused_field, BudgetField::Category);
        assert!(form.focused_input().is_none());

        form.next_field();
        assert_eq!(form.focused_field, BudgetField::Amount);
        assert!(form.focused_input().is_some());
    }

    #[test]
    fn test_reset() {
        let mut form = BudgetFormState::new();
        form.category.next();
        form.amount.insert('9');
        form.next_field();

        form.reset();
        assert!(form.category.selected.is_none());
        assert_eq!(form.amount.value(), "");
        assert_eq!(form.focused_field, BudgetField::Category);
    }
}
