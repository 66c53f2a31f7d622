//! Reports for tally
//!
//! One-shot, stateless aggregations over the ledger. Reports never
//! mutate state.

pub mod chart;

pub use chart::{ChartData, ChartSlice, ChartStatus};
