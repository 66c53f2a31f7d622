//! Business logic layer for tally
//!
//! All command handlers live on the [`Tracker`], which owns the loaded
//! application state and flushes it to storage after every mutation.

pub mod tracker;

pub use tracker::{BudgetAlert, Tracker};
