//! Comparison entry point
//!
//! Validates and resolves the two roots, builds both trees, and diffs them.
//! This is the boundary a presentation layer calls into: two path strings in,
//! one serializable [`Comparison`] (or a [`CompareError`]) out.

use crate::diff::{DiffOptions, DiffStats, Differ};
use crate::error::CompareError;
use crate::tree::node::Node;
use crate::tree::path;
use crate::tree::walker::WalkerConfig;
use crate::tree::TreeBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Comparison settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Build both trees, and sibling entries, on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Synthesize `Missing` placeholders on the side where an entry is absent
    #[serde(default)]
    pub mirror_missing: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            mirror_missing: false,
        }
    }
}

/// Result of comparing two directory trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Resolved first root
    pub dir1: String,
    /// Resolved second root
    pub dir2: String,
    pub tree1: Option<Node>,
    pub tree2: Option<Node>,
}

impl Comparison {
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_trees(self.tree1.as_ref(), self.tree2.as_ref())
    }

    /// Nodes at `relative_path` on each side.
    pub fn find(&self, relative_path: &str) -> (Option<&Node>, Option<&Node>) {
        (
            lookup(self.tree1.as_ref(), relative_path),
            lookup(self.tree2.as_ref(), relative_path),
        )
    }

    pub fn to_json(&self) -> Result<String, CompareError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn lookup<'a>(tree: Option<&'a Node>, relative_path: &str) -> Option<&'a Node> {
    tree.and_then(|root| root.find(relative_path))
        .filter(|node| !node.is_placeholder())
}

/// Runs comparisons with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    walker: WalkerConfig,
    options: CompareOptions,
}

impl Comparer {
    pub fn new(walker: WalkerConfig, options: CompareOptions) -> Self {
        Self { walker, options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare the trees rooted at `dir1` and `dir2`.
    ///
    /// Fails before any walking when either path is blank or does not
    /// resolve, and after building when neither tree could be built.
    #[instrument(skip(self))]
    pub fn compare(&self, dir1: &str, dir2: &str) -> Result<Comparison, CompareError> {
        let start = Instant::now();
        let (dir1, dir2) = (dir1.trim(), dir2.trim());
        if dir1.is_empty() || dir2.is_empty() {
            return Err(CompareError::MissingPaths);
        }

        let root1 = path::resolve_root(dir1).map_err(|e| {
            debug!("Failed to resolve directory 1: {}", e);
            CompareError::FirstDirectoryNotFound(dir1.to_string())
        })?;
        let root2 = path::resolve_root(dir2).map_err(|e| {
            debug!("Failed to resolve directory 2: {}", e);
            CompareError::SecondDirectoryNotFound(dir2.to_string())
        })?;

        let (tree1, tree2) = if self.options.parallel {
            rayon::join(|| self.build(&root1), || self.build(&root2))
        } else {
            (self.build(&root1), self.build(&root2))
        };

        if tree1.is_none() && tree2.is_none() {
            return Err(CompareError::BothTreesInaccessible);
        }

        let differ = Differ::new(DiffOptions {
            mirror_missing: self.options.mirror_missing,
        });
        let (tree1, tree2) = differ.diff(tree1.as_ref(), tree2.as_ref());

        let comparison = Comparison {
            dir1: root1.display().to_string(),
            dir2: root2.display().to_string(),
            tree1,
            tree2,
        };

        let stats = comparison.stats();
        info!(
            same = stats.same,
            different = stats.different,
            missing = stats.missing,
            duration_ms = start.elapsed().as_millis(),
            "Comparison completed"
        );

        Ok(comparison)
    }

    fn build(&self, root: &Path) -> Option<Node> {
        TreeBuilder::new(root.to_path_buf())
            .with_walker_config(self.walker.clone())
            .parallel(self.options.parallel)
            .build()
    }
}

/// Compare two roots with default settings.
pub fn compare(dir1: &str, dir2: &str) -> Result<Comparison, CompareError> {
    Comparer::default().compare(dir1, dir2)
}
