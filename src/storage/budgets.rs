//! Budget table snapshot store
//!
//! Manages loading and saving the per-category limits to budgets.json,
//! independently of the ledger snapshot.

use std::path::PathBuf;

use crate::error::TrackerError;
use crate::models::BudgetTable;

use super::file_io::{read_json, write_json_atomic};

/// Store for budget table persistence
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a new budget store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the budget table from disk
    ///
    /// A missing or unparsable snapshot yields the all-zeros table, which
    /// is immediately persisted back.
    pub fn load(&self) -> Result<BudgetTable, TrackerError> {
        match read_json(&self.path)? {
            Some(table) => Ok(table),
            None => {
                let table = BudgetTable::default();
                self.save(&table)?;
                Ok(table)
            }
        }
    }

    /// Save the budget table as one atomic overwrite
    pub fn save(&self, table: &BudgetTable) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BudgetStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BudgetStore::new(temp_dir.path().join("budgets.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_missing_returns_zeros_and_persists() {
        let (temp_dir, store) = create_test_store();

        let table = store.load().unwrap();
        assert_eq!(table, BudgetTable::default());
        assert!(temp_dir.path().join("budgets.json").exists());
    }

    #[test]
    fn test_load_corrupt_returns_zeros() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(temp_dir.path().join("budgets.json"), "[1, 2").unwrap();

        let table = store.load().unwrap();
        assert_eq!(table, BudgetTable::default());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();

        let mut table = BudgetTable::default();
        table.set(Category::Food, 300.0);
        store.save(&table).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.limit(Category::Food), 300.0);
        assert_eq!(loaded.limit(Category::Transport), 0.0);
    }
}
