//! The tracker: application state plus command handlers
//!
//! The [`Tracker`] owns the in-memory ledger and budget table together
//! with the storage they came from. Every handler validates its input,
//! mutates state, and persists the affected snapshot before returning;
//! a validation failure leaves both state and storage untouched.

use std::fmt;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetTable, Category, Expense, Ledger, Summary};
use crate::storage::Storage;

/// Warning raised when a category's running total exceeds its limit
///
/// Names the category and the configured limit only, not the overage.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: Category,
    pub limit: f64,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expenses for {} have exceeded the budget of {:.2}!",
            self.category, self.limit
        )
    }
}

/// Application state: the loaded ledger and budget table plus their storage
pub struct Tracker {
    storage: Storage,
    ledger: Ledger,
    budgets: BudgetTable,
}

impl Tracker {
    /// Load the tracker state from storage
    ///
    /// Missing or corrupt snapshots are silently replaced with defaults
    /// by the storage layer.
    pub fn open(storage: Storage) -> TrackerResult<Self> {
        let ledger = storage.ledger.load()?;
        let budgets = storage.budgets.load()?;
        Ok(Self {
            storage,
            ledger,
            budgets,
        })
    }

    /// The current ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The current budget table
    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Recomputed-on-demand totals for the summary view
    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    /// Add to cumulative income
    ///
    /// Returns the amount added for the success notice.
    pub fn add_income(&mut self, amount: f64) -> TrackerResult<f64> {
        validate_amount(amount)?;

        self.ledger.income += amount;
        self.storage.ledger.save(&mut self.ledger)?;
        Ok(amount)
    }

    /// Record an expense
    ///
    /// Appends the record and persists the ledger, then evaluates the
    /// budget-alert rule: if the running total of this expense's category
    /// (including the one just added) exceeds the category's limit, a
    /// [`BudgetAlert`] is returned alongside the success. The alert
    /// re-fires on every add while the condition holds.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> TrackerResult<Option<BudgetAlert>> {
        validate_amount(amount)?;

        self.ledger
            .expenses
            .push(Expense::new(description, amount, category));
        self.storage.ledger.save(&mut self.ledger)?;

        let category_total = self.ledger.category_total(category.as_str());
        let limit = self.budgets.limit(category);
        if category_total > limit {
            return Ok(Some(BudgetAlert { category, limit }));
        }

        Ok(None)
    }

    /// Overwrite the budget limit for a category
    pub fn set_budget(&mut self, category: Category, limit: f64) -> TrackerResult<()> {
        validate_amount(limit)?;

        self.budgets.set(category, limit);
        self.storage.budgets.save(&self.budgets)?;
        Ok(())
    }

    /// Recompute savings and persist the ledger
    ///
    /// Returns the computed value. The save path re-establishes the same
    /// identity, so the stored and reported values cannot diverge.
    pub fn calculate_savings(&mut self) -> TrackerResult<f64> {
        let savings = self.ledger.recompute_savings();
        self.storage.ledger.save(&mut self.ledger)?;
        Ok(savings)
    }

    /// Reset the ledger to zeros and persist
    ///
    /// Irreversible; the budget table is not touched.
    pub fn delete_all(&mut self) -> TrackerResult<()> {
        self.ledger.reset();
        self.storage.ledger.save(&mut self.ledger)?;
        Ok(())
    }
}

/// Reject non-finite and negative amounts
fn validate_amount(amount: f64) -> TrackerResult<()> {
    if !amount.is_finite() {
        return Err(TrackerError::invalid_amount(amount.to_string()));
    }
    if amount < 0.0 {
        return Err(TrackerError::Validation(format!(
            "Amount must not be negative, got {}.",
            amount
        )));
    }
    Ok(())
}
