//! Expense records
//!
//! An expense is never mutated after creation and is removed only by a
//! full ledger reset. Records have no unique identifier; they are
//! positionally distinct within the ledger's expense sequence.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-text description
    pub description: String,

    /// Expense amount
    pub amount: f64,

    /// Category name as stored in the ledger file
    ///
    /// Stored as the canonical name string so the snapshot format stays a
    /// plain `{description, amount, category}` record and chart
    /// aggregation can fold unrecognized names into an "Uncategorized"
    /// bucket. New records are only created through a typed [`Category`].
    pub category: String,
}

impl Expense {
    /// Create a new expense record against a category
    pub fn new(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.as_str().to_string(),
        }
    }

    /// Check whether this expense belongs to the given category
    pub fn is_in(&self, category: Category) -> bool {
        self.category == category.as_str()
    }
}
