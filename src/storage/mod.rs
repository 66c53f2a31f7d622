//! Storage layer for tally
//!
//! Provides JSON whole-file snapshot storage with atomic writes and
//! automatic directory creation. The ledger and the budget table live in
//! two independent files; each mutating handler rewrites its file in full
//! after every change.

pub mod budgets;
pub mod file_io;
pub mod ledger;

pub use budgets::BudgetStore;
pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerStore;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Storage coordinator that provides access to both stores
pub struct Storage {
    paths: TrackerPaths,
    pub ledger: LedgerStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerStore::new(paths.ledger_file()),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("tally");
        let paths = TrackerPaths::with_base_dir(base.clone());

        let storage = Storage::new(paths).unwrap();
        assert!(base.exists());
        assert_eq!(storage.paths().base_dir(), &base);
    }
}
