//! Tree Differ
//!
//! Merges two built trees name-by-name into two status-annotated trees, and
//! summarizes the result.

pub mod differ;
pub mod stats;

pub use differ::{diff, DiffOptions, DiffPair, Differ};
pub use stats::DiffStats;
