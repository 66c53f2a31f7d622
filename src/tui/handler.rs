//! Event handler for the TUI
//!
//! Routes keyboard events to the menu or to the active dialog, and
//! executes the tracker actions. Validation failures stay inside the
//! open dialog; storage failures surface as error toasts. No failure
//! stops the event loop.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::models::parse_amount;
use crate::reports::{ChartData, ChartStatus};
use crate::TrackerError;

use super::app::{ActiveDialog, App, MenuAction};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::None => handle_menu_key(app, key),
        ActiveDialog::Income => handle_income_key(app, key),
        ActiveDialog::Expense => handle_expense_key(app, key),
        ActiveDialog::Budget => handle_budget_key(app, key),
        ActiveDialog::Chart(_) => handle_chart_key(app, key),
    }
}

/// Handle keys on the main menu
fn handle_menu_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => activate_selected(app),
        _ => {}
    }
    Ok(())
}

/// Execute the selected menu action
fn activate_selected(app: &mut App) {
    match app.selected() {
        MenuAction::AddIncome => {
            app.income_form.reset();
            app.active_dialog = ActiveDialog::Income;
        }
        MenuAction::AddExpense => {
            app.expense_form.reset();
            app.active_dialog = ActiveDialog::Expense;
        }
        MenuAction::SetBudget => {
            app.budget_form.reset();
            app.active_dialog = ActiveDialog::Budget;
        }
        MenuAction::CalculateSavings => calculate_savings(app),
        MenuAction::GenerateChart => generate_chart(app),
        MenuAction::DeleteAll => delete_all(app),
    }
}

fn calculate_savings(app: &mut App) {
    match app.tracker.calculate_savings() {
        Ok(savings) => app.notify(Notification::info(format!(
            "Your total savings are: {}",
            savings
        ))),
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

/// Delete-all is irreversible and intentionally unconfirmed
fn delete_all(app: &mut App) {
    match app.tracker.delete_all() {
        Ok(()) => app.notify(Notification::success(
            "All transactions deleted successfully!",
        )),
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

fn generate_chart(app: &mut App) {
    match ChartData::build(&app.tracker.ledger().expenses) {
        Ok(ChartStatus::NoExpenses) => app.notify(Notification::info(
            "No expenses found. Please add transactions first.",
        )),
        Ok(ChartStatus::NothingToPlot) => {
            app.notify(Notification::info("No expenses found to plot."))
        }
        Ok(ChartStatus::Ready(data)) => {
            app.active_dialog = ActiveDialog::Chart(data);
        }
        Err(e @ TrackerError::Chart(_)) => app.notify(Notification::error(e.to_string())),
        Err(e) => app.notify(Notification::error(format!(
            "An unexpected error occurred: {}",
            e
        ))),
    }
}

/// Handle keys in the income dialog
fn handle_income_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit_income(app),
        KeyCode::Backspace => app.income_form.amount.backspace(),
        KeyCode::Char(c) => app.income_form.amount.insert(c),
        _ => {}
    }
    Ok(())
}

fn submit_income(app: &mut App) {
    let amount = match parse_amount(app.income_form.amount.value()) {
        Ok(amount) => amount,
        Err(e) => {
            app.income_form.error = Some(e.to_string());
            return;
        }
    };

    match app.tracker.add_income(amount) {
        Ok(added) => {
            app.close_dialog();
            app.notify(Notification::success(format!(
                "Income of {} added successfully!",
                added
            )));
        }
        Err(e) if e.is_validation() => app.income_form.error = Some(e.to_string()),
        Err(e) => {
            app.close_dialog();
            app.notify(Notification::error(e.to_string()));
        }
    }
}

/// Handle keys in the expense dialog
fn handle_expense_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit_expense(app),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Left => {
            if app.expense_form.focused_input().is_none() {
                app.expense_form.category.prev();
            }
        }
        KeyCode::Right => {
            if app.expense_form.focused_input().is_none() {
                app.expense_form.category.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.expense_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.expense_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn submit_expense(app: &mut App) {
    // The amount is validated before the category selection; an invalid
    // amount wins even when the category is also missing.
    let amount = match parse_amount(app.expense_form.amount.value()) {
        Ok(amount) => amount,
        Err(e) => {
            app.expense_form.error = Some(e.to_string());
            return;
        }
    };

    let Some(category) = app.expense_form.category.selected else {
        app.expense_form.error = Some(TrackerError::category_required().to_string());
        return;
    };

    let description = app.expense_form.description.value().to_string();
    match app.tracker.add_expense(description, amount, category) {
        Ok(alert) => {
            app.close_dialog();
            if let Some(alert) = alert {
                app.notify(Notification::warning(alert.to_string()));
            }
            app.notify(Notification::success("Expense added successfully!"));
        }
        Err(e) if e.is_validation() => app.expense_form.error = Some(e.to_string()),
        Err(e) => {
            app.close_dialog();
            app.notify(Notification::error(e.to_string()));
        }
    }
}

/// Handle keys in the budget dialog
fn handle_budget_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit_budget(app),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.budget_form.next_field()
        }
        KeyCode::Left => {
            if app.budget_form.focused_input().is_none() {
                app.budget_form.category.prev();
            }
        }
        KeyCode::Right => {
            if app.budget_form.focused_input().is_none() {
                app.budget_form.category.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.budget_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.budget_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn submit_budget(app: &mut App) {
    // The category selection is validated before the amount, the
    // reverse of the expense form.
    let Some(category) = app.budget_form.category.selected else {
        app.budget_form.error = Some(TrackerError::category_required().to_string());
        return;
    };

    let amount = match parse_amount(app.budget_form.amount.value()) {
        Ok(amount) => amount,
        Err(e) => {
            app.budget_form.error = Some(e.to_string());
            return;
        }
    };

    match app.tracker.set_budget(category, amount) {
        Ok(()) => {
            app.close_dialog();
            app.notify(Notification::success(format!(
                "Budget for {} set to {}!",
                category, amount
            )));
        }
        Err(e) if e.is_validation() => app.budget_form.error = Some(e.to_string()),
        Err(e) => {
            app.close_dialog();
            app.notify(Notification::error(e.to_string()));
        }
    }
}

/// Handle keys in the chart overlay
fn handle_chart_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_dialog(),
        _ => {}
    }
    Ok(())
}
