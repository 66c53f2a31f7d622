//! The budget table: per-category spending limits
//!
//! A flat mapping from each of the five categories to a numeric limit,
//! persisted in its own snapshot file independently of the ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Per-category spending limits, default 0.0 for every category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetTable {
    limits: BTreeMap<Category, f64>,
}

impl Default for BudgetTable {
    fn default() -> Self {
        let limits = Category::ALL.iter().map(|c| (*c, 0.0)).collect();
        Self { limits }
    }
}

impl BudgetTable {
    /// Get the limit for a category (0.0 when never set)
    pub fn limit(&self, category: Category) -> f64 {
        self.limits.get(&category).copied().unwrap_or(0.0)
    }

    /// Overwrite the limit for a category
    ///
    /// A second call on the same category replaces the previous value;
    /// limits never accumulate.
    pub fn set(&mut self, category: Category, limit: f64) {
        self.limits.insert(category, limit);
    }

    /// Iterate over all categories with their limits
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.limit(*c)))
    }
}
