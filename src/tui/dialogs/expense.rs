//! Add-expense dialog
//!
//! Description, amount, and a category picker. On submit the amount is
//! validated before the category selection; either failure leaves the
//! form open and mutates nothing.

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

/// Which field is focused in the expense dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
    Category,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Description input
    pub description: TextInput,
    /// Amount input
    pub amount: TextInput,
    /// Category picker, unset until the user chooses
    pub category: CategorySelect,
    /// Which field is focused
    pub focused_field: ExpenseField,
    /// Validation error to display
    pub error: Option<String>,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            description: TextInput::new()
                .label("Description")
                .placeholder("Enter description"),
            amount: TextInput::new().label("Amount").placeholder("Enter amount"),
            category: CategorySelect::new().label("Category"),
            focused_field: ExpenseField::Description,
            error: None,
        }
    }

    /// Reset for a fresh dialog open
    pub fn reset(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
        self.focused_field = ExpenseField::Description;
        self.error = None;
        self.sync_focus();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.sync_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.sync_focus();
    }

    /// Mirror the focused field onto the widgets
    fn sync_focus(&mut self) {
        self.description.focused = self.focused_field == ExpenseField::Description;
        self.amount.focused = self.focused_field == ExpenseField::Amount;
        self.category.focused = self.focused_field == ExpenseField::Category;
    }

    /// The text input currently focused, if the focus is on one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Description => Some(&mut self.description),
            ExpenseField::Amount => Some(&mut self.amount),
            ExpenseField::Category => None,
        }
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // description
            Constraint::Length(1), // amount
            Constraint::Length(1), // category
            Constraint::Length(1), // spacing
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    frame.render_widget(&app.expense_form.description, rows[1]);
    frame.render_widget(&app.expense_form.amount, rows[2]);
    frame.render_widget(&app.expense_form.category, rows[3]);

    if let Some(ref error) = app.expense_form.error {
        let line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), rows[5]);
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
    frame.render_widget(Paragraph::new(hints), rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.focused_field, ExpenseField::Description);

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        assert!(form.amount.focused);
        assert!(!form.description.focused);

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        assert!(form.focused_input().is_none());

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Description);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ExpenseFormState::new();
        form.description.insert('x');
        form.amount.insert('1');
        form.category.next();
        form.error = Some("bad".into());
        form.next_field();

        form.reset();
        assert_eq!(form.description.value(), "");
        assert_eq!(form.amount.value(), "");
        assert!(form.category.selected.is_none());
        assert_eq!(form.focused_field, ExpenseField::Description);
        assert!(form.error.is_none());
    }
}
