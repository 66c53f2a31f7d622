//! Reporting CLI commands: savings, summary, chart, reset

use crate::error::TrackerResult;
use crate::reports::{ChartData, ChartStatus};
use crate::services::Tracker;

/// Recompute savings, persist, and report the value
pub fn handle_savings(tracker: &mut Tracker) -> TrackerResult<()> {
    let savings = tracker.calculate_savings()?;
    println!("Your total savings are: {}", savings);
    Ok(())
}

/// Print the summary projection
pub fn handle_summary(tracker: &Tracker) -> TrackerResult<()> {
    let summary = tracker.summary();
    println!("Income: {}", summary.income);
    println!("Expenses: {}", summary.total_expenses);
    println!("Savings: {}", summary.savings);
    Ok(())
}

/// Reset the ledger; irreversible
pub fn handle_reset(tracker: &mut Tracker) -> TrackerResult<()> {
    tracker.delete_all()?;
    println!("All transactions deleted successfully!");
    Ok(())
}

/// Print the spending-by-category breakdown
pub fn handle_chart(tracker: &Tracker) -> TrackerResult<()> {
    match ChartData::build(&tracker.ledger().expenses)? {
        ChartStatus::NoExpenses => {
            println!("No expenses found. Please add transactions first.");
        }
        ChartStatus::NothingToPlot => {
            println!("No expenses found to plot.");
        }
        ChartStatus::Ready(data) => {
            println!("Expenses by Category");
            for slice in &data.slices {
                println!(
                    "{:<15} {:>10.2}  {:>6}  {}",
                    slice.label,
                    slice.total,
                    slice.percentage_label(),
                    bar(slice.percentage)
                );
            }
            println!("{:<15} {:>10.2}", "Total", data.total);
        }
    }
    Ok(())
}

/// A proportional bar for terminal output, scaled to 40 columns
fn bar(percentage: f64) -> String {
    let width = (percentage / 100.0 * 40.0).round() as usize;
    "#".repeat(width)
}
