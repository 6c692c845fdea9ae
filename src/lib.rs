//! Treediff: Directory Tree Comparison
//!
//! Builds an in-memory tree for each of two directories, recording size,
//! timestamps and a content fingerprint per file, then merges the trees by
//! entry name and annotates every node as `same`, `different` or `missing`.
//!
//! ```no_run
//! let comparison = treediff::compare::compare("./left", "./right")?;
//! println!("{}", comparison.to_json()?);
//! # Ok::<(), treediff::error::CompareError>(())
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
