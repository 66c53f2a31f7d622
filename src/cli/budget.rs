//! Budget CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::parse_amount;
use crate::services::Tracker;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a category (overwrites any previous limit)
    Set {
        /// Category: Food, Transport, Utilities, Entertainment, or Other
        category: String,
        /// Limit amount (e.g., "300" or "300.00")
        amount: String,
    },

    /// List all category limits
    List,
}

/// Handle a budget command
pub fn handle_budget_command(tracker: &mut Tracker, cmd: BudgetCommands) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            // Category is validated before the amount, matching the
            // interactive form.
            let category = category.parse()?;
            let amount = parse_amount(&amount)?;

            tracker.set_budget(category, amount)?;
            println!("Budget for {} set to {}!", category, amount);
        }

        BudgetCommands::List => {
            for (category, limit) in tracker.budgets().iter() {
                println!("{:<15} {:>10.2}", category.as_str(), limit);
            }
        }
    }

    Ok(())
}
