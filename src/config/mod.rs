//! Configuration module for tally
//!
//! Provides platform-aware path resolution for the data directory
//! and the two snapshot files.

pub mod paths;

pub use paths::TrackerPaths;
