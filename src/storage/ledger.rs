//! Ledger snapshot store
//!
//! Manages loading and saving the ledger to transactions.json as a
//! whole-file snapshot. The save path recomputes savings before writing,
//! so the stored value always matches income minus expenses at the
//! moment of the write.

use std::path::PathBuf;

use crate::error::TrackerError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Store for ledger persistence
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a new ledger store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger from disk
    ///
    /// A missing or unparsable snapshot yields the zero-default ledger,
    /// which is immediately persisted back. Corruption is never surfaced
    /// to the caller.
    pub fn load(&self) -> Result<Ledger, TrackerError> {
        match read_json(&self.path)? {
            Some(ledger) => Ok(ledger),
            None => {
                let mut ledger = Ledger::default();
                self.save(&mut ledger)?;
                Ok(ledger)
            }
        }
    }

    /// Save the ledger to disk
    ///
    /// Recomputes savings from income and expenses, then writes the whole
    /// ledger as one atomic overwrite.
    pub fn save(&self, ledger: &mut Ledger) -> Result<(), TrackerError> {
        ledger.recompute_savings();
        write_json_atomic(&self.path, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("transactions.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_missing_returns_default_and_persists() {
        let (temp_dir, store) = create_test_store();

        let ledger = store.load().unwrap();
        assert_eq!(ledger, Ledger::default());

        // The default must have been written back to disk
        assert!(temp_dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_load_corrupt_returns_default_and_persists() {
        let (temp_dir, store) = create_test_store();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "{{{ definitely not json").unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger, Ledger::default());

        // The corrupt file is replaced with a valid default snapshot
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, Ledger::default());
    }

    #[test]
    fn test_save_recomputes_savings() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger {
            income: 1000.0,
            savings: -1.0, // stale
            ..Default::default()
        };
        ledger
            .expenses
            .push(Expense::new("rent", 800.0, Category::Utilities));

        store.save(&mut ledger).unwrap();
        assert_eq!(ledger.savings, 200.0);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.savings, 200.0);
        assert_eq!(loaded.income, 1000.0);
        assert_eq!(loaded.expenses.len(), 1);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::default();
        ledger.expenses.push(Expense::new("first", 1.0, Category::Food));
        ledger
            .expenses
            .push(Expense::new("second", 2.0, Category::Other));
        store.save(&mut ledger).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.expenses[0].description, "first");
        assert_eq!(loaded.expenses[1].description, "second");
    }
}
