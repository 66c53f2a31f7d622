//! Spending chart aggregation
//!
//! Aggregates expense amounts by category across the full expense
//! sequence. Expense records carry their category as a stored name, so
//! names outside the known set fold into an "Uncategorized" bucket.
//! The aggregation is a one-shot projection; rendering is left to the
//! CLI and TUI layers.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense};

/// Bucket label for expense records whose category name is unknown
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One slice of the spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    /// Category name (or [`UNCATEGORIZED`])
    pub label: String,
    /// Aggregate amount for this category
    pub total: f64,
    /// Share of the grand total, 0.0 to 100.0
    pub percentage: f64,
}

impl ChartSlice {
    /// The percentage formatted to one decimal place, e.g. "33.3%"
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Aggregated chart data with one slice per category
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub slices: Vec<ChartSlice>,
    pub total: f64,
}

/// Outcome of building the chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    /// No expenses recorded; show an informational notice, no chart
    NoExpenses,
    /// Expenses exist but every aggregate is zero; notice, no chart
    NothingToPlot,
    /// Chart data ready to render
    Ready(ChartData),
}

impl ChartData {
    /// Aggregate the expense sequence into chart slices
    ///
    /// Fails with a data-validation error naming the offending record if
    /// any amount is non-finite.
    pub fn build(expenses: &[Expense]) -> TrackerResult<ChartStatus> {
        if expenses.is_empty() {
            return Ok(ChartStatus::NoExpenses);
        }

        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for expense in expenses {
            if !expense.amount.is_finite() {
                return Err(TrackerError::Chart(format!(
                    "Invalid amount in expense '{}'",
                    expense.description
                )));
            }
            let label = bucket_label(&expense.category);
            *totals.entry(label.to_string()).or_insert(0.0) += expense.amount;
        }

        let total: f64 = totals.values().sum();
        if totals.values().all(|v| *v == 0.0) {
            return Ok(ChartStatus::NothingToPlot);
        }

        let slices = totals
            .into_iter()
            .map(|(label, amount)| ChartSlice {
                percentage: amount / total * 100.0,
                label,
                total: amount,
            })
            .collect();

        Ok(ChartStatus::Ready(ChartData { slices, total }))
    }
}

/// Map a stored category name onto a chart bucket
fn bucket_label(stored: &str) -> &str {
    match Category::from_str(stored) {
        Ok(category) => category.as_str(),
        Err(_) => UNCATEGORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn expense(description: &str, amount: f64, category: Category) -> Expense {
        Expense::new(description, amount, category)
    }

    #[test]
    fn test_empty_sequence() {
        let status = ChartData::build(&[]).unwrap();
        assert_eq!(status, ChartStatus::NoExpenses);
    }

    #[test]
    fn test_all_zero_amounts() {
        let expenses = vec![
            expense("a", 0.0, Category::Food),
            expense("b", 0.0, Category::Transport),
        ];
        let status = ChartData::build(&expenses).unwrap();
        assert_eq!(status, ChartStatus::NothingToPlot);
    }

    #[test]
    fn test_single_category_is_whole_pie() {
        let expenses = vec![
            expense("a", 10.0, Category::Food),
            expense("b", 30.0, Category::Food),
        ];

        let status = ChartData::build(&expenses).unwrap();
        let ChartStatus::Ready(data) = status else {
            panic!("expected chart data");
        };

        assert_eq!(data.slices.len(), 1);
        assert_eq!(data.slices[0].label, "Food");
        assert_eq!(data.slices[0].total, 40.0);
        assert_eq!(data.slices[0].percentage_label(), "100.0%");
    }

    #[test]
    fn test_percentage_split() {
        let expenses = vec![
            expense("a", 75.0, Category::Food),
            expense("b", 25.0, Category::Transport),
        ];

        let ChartStatus::Ready(data) = ChartData::build(&expenses).unwrap() else {
            panic!("expected chart data");
        };

        assert_eq!(data.total, 100.0);
        let food = data.slices.iter().find(|s| s.label == "Food").unwrap();
        let transport = data.slices.iter().find(|s| s.label == "Transport").unwrap();
        assert_eq!(food.percentage_label(), "75.0%");
        assert_eq!(transport.percentage_label(), "25.0%");
    }

    #[test]
    fn test_unknown_category_folds_into_uncategorized() {
        let mut odd = expense("misc", 10.0, Category::Other);
        odd.category = "Groceries".to_string();
        let expenses = vec![odd, expense("a", 10.0, Category::Food)];

        let ChartStatus::Ready(data) = ChartData::build(&expenses).unwrap() else {
            panic!("expected chart data");
        };

        let labels: Vec<_> = data.slices.iter().map(|s| s.label.as_str()).collect();
        assert!(labels.contains(&UNCATEGORIZED));
        assert!(labels.contains(&"Food"));
    }

    #[test]
    fn test_non_finite_amount_aborts_with_record_name() {
        let mut bad = expense("broken", 1.0, Category::Food);
        bad.amount = f64::INFINITY;
        let expenses = vec![expense("ok", 5.0, Category::Food), bad];

        let err = ChartData::build(&expenses).unwrap_err();
        assert!(err.is_chart());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_zero_slice_kept_when_total_is_nonzero() {
        let expenses = vec![
            expense("a", 0.0, Category::Food),
            expense("b", 50.0, Category::Transport),
        ];

        let ChartStatus::Ready(data) = ChartData::build(&expenses).unwrap() else {
            panic!("expected chart data");
        };

        assert_eq!(data.slices.len(), 2);
        let food = data.slices.iter().find(|s| s.label == "Food").unwrap();
        assert_eq!(food.percentage_label(), "0.0%");
    }
}
