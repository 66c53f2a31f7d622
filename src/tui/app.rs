//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events: the tracker itself, the menu selection, the active dialog,
//! and the notification queue.

use crate::reports::ChartData;
use crate::services::Tracker;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::income::IncomeFormState;
use super::widgets::{Notification, NotificationQueue};

/// The actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddIncome,
    AddExpense,
    SetBudget,
    CalculateSavings,
    GenerateChart,
    DeleteAll,
}

impl MenuAction {
    /// All actions, in display order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddIncome,
        MenuAction::AddExpense,
        MenuAction::SetBudget,
        MenuAction::CalculateSavings,
        MenuAction::GenerateChart,
        MenuAction::DeleteAll,
    ];

    /// Menu label for this action
    pub const fn label(&self) -> &'static str {
        match self {
            MenuAction::AddIncome => "Add Income",
            MenuAction::AddExpense => "Add Expense",
            MenuAction::SetBudget => "Set Budget",
            MenuAction::CalculateSavings => "Calculate Savings",
            MenuAction::GenerateChart => "Generate Chart",
            MenuAction::DeleteAll => "Delete All",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Income,
    Expense,
    Budget,
    Chart(ChartData),
}

/// Main application state
pub struct App {
    /// The tracker: ledger, budgets, and their storage
    pub tracker: Tracker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Selected index into [`MenuAction::ALL`]
    pub selected_action: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Income dialog state
    pub income_form: IncomeFormState,

    /// Expense dialog state
    pub expense_form: ExpenseFormState,

    /// Budget dialog state
    pub budget_form: BudgetFormState,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl App {
    /// Create the application state around a loaded tracker
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            should_quit: false,
            selected_action: 0,
            active_dialog: ActiveDialog::None,
            income_form: IncomeFormState::new(),
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Signal the event loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// The currently selected menu action
    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.selected_action]
    }

    /// Move the menu selection down
    pub fn move_down(&mut self) {
        self.selected_action = (self.selected_action + 1) % MenuAction::ALL.len();
    }

    /// Move the menu selection up
    pub fn move_up(&mut self) {
        self.selected_action =
            (self.selected_action + MenuAction::ALL.len() - 1) % MenuAction::ALL.len();
    }

    /// Close any open dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Push a notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let tracker = Tracker::open(storage).unwrap();
        (temp_dir, App::new(tracker))
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let (_temp_dir, mut app) = create_test_app();
        assert_eq!(app.selected(), MenuAction::AddIncome);

        app.move_up();
        assert_eq!(app.selected(), MenuAction::DeleteAll);

        app.move_down();
        assert_eq!(app.selected(), MenuAction::AddIncome);
    }

    #[test]
    fn test_dialog_state() {
        let (_temp_dir, mut app) = create_test_app();
        assert!(!app.has_dialog());

        app.active_dialog = ActiveDialog::Income;
        assert!(app.has_dialog());

        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
