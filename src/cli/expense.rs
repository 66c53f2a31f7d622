//! Expense CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::parse_amount;
use crate::services::Tracker;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Free-text description
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category: Food, Transport, Utilities, Entertainment, or Other
        category: String,
    },

    /// List all recorded expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(tracker: &mut Tracker, cmd: ExpenseCommands) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            // Amount is validated before the category, matching the
            // interactive form.
            let amount = parse_amount(&amount)?;
            let category = category.parse()?;

            let alert = tracker.add_expense(description, amount, category)?;
            if let Some(alert) = alert {
                println!("Budget Alert: {}", alert);
            }
            println!("Expense added successfully!");

            let summary = tracker.summary();
            println!(
                "Income: {}  Expenses: {}  Savings: {}",
                summary.income, summary.total_expenses, summary.savings
            );
        }

        ExpenseCommands::List => {
            let expenses = &tracker.ledger().expenses;
            if expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }

            for expense in expenses {
                println!(
                    "{:<30} {:>10.2}  {}",
                    expense.description, expense.amount, expense.category
                );
            }
            println!("Total: {:.2}", tracker.ledger().total_expenses());
        }
    }

    Ok(())
}
