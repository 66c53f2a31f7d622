use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_budget_command, handle_chart, handle_expense_command, handle_income_command,
    handle_reset, handle_savings, handle_summary, BudgetCommands, ExpenseCommands, IncomeCommands,
};
use tally::config::paths::TrackerPaths;
use tally::services::Tracker;
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "tally is a single-user personal finance tracker. It records \
                  income and categorized expenses, computes savings, warns when \
                  a category exceeds its budget, and renders a spending chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Recompute and report savings
    Savings,

    /// Show current income, expenses, and savings
    Summary,

    /// Show spending by category
    Chart,

    /// Delete all transactions (irreversible)
    Reset,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage; missing or corrupt snapshots are
    // replaced with defaults during open.
    let paths = TrackerPaths::new()?;
    let storage = Storage::new(paths.clone())?;
    let mut tracker = Tracker::open(storage)?;

    match cli.command {
        Some(Commands::Tui) => {
            tally::tui::run_tui(tracker)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut tracker, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut tracker, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut tracker, cmd)?;
        }
        Some(Commands::Savings) => {
            handle_savings(&mut tracker)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&tracker)?;
        }
        Some(Commands::Chart) => {
            handle_chart(&tracker)?;
        }
        Some(Commands::Reset) => {
            handle_reset(&mut tracker)?;
        }
        Some(Commands::Config) => {
            println!("tally configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
        }
        None => {
            println!("tally - Terminal-based personal finance tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
