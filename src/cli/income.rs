//! Income CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::parse_amount;
use crate::services::Tracker;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add to cumulative income
    Add {
        /// Amount to add (e.g., "1000" or "1000.50")
        amount: String,
    },
}

/// Handle an income command
pub fn handle_income_command(tracker: &mut Tracker, cmd: IncomeCommands) -> TrackerResult<()> {
    match cmd {
        IncomeCommands::Add { amount } => {
            let amount = parse_amount(&amount)?;
            let added = tracker.add_income(amount)?;
            println!("Income of {} added successfully!", added);

            let summary = tracker.summary();
            println!(
                "Income: {}  Expenses: {}  Savings: {}",
                summary.income, summary.total_expenses, summary.savings
            );
        }
    }

    Ok(())
}
