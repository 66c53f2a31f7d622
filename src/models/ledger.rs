//! The ledger: income, expenses, and derived savings
//!
//! The stored `savings` field is only guaranteed consistent with
//! `income`/`expenses` immediately after a save, which recomputes it.

use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// The persisted record of income, expenses, and derived savings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Cumulative income, monotonically increased by add-income
    #[serde(default)]
    pub income: f64,

    /// Expense records in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Derived savings, recomputed on every save
    #[serde(default)]
    pub savings: f64,
}

impl Ledger {
    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Recompute and store `savings = income - total expenses`
    ///
    /// Returns the recomputed value.
    pub fn recompute_savings(&mut self) -> f64 {
        self.savings = self.income - self.total_expenses();
        self.savings
    }

    /// Sum of expense amounts in the given category name
    pub fn category_total(&self, category: &str) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Reset to the empty state (zero income, no expenses, zero savings)
    pub fn reset(&mut self) {
        *self = Ledger::default();
    }

    /// Derived summary projection
    pub fn summary(&self) -> Summary {
        Summary {
            income: self.income,
            total_expenses: self.total_expenses(),
            savings: self.income - self.total_expenses(),
        }
    }
}

/// A recomputed-on-demand view of the ledger totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub total_expenses: f64,
    pub savings: f64,
}
