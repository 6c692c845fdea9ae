//! Tree builder for constructing annotated filesystem trees

use crate::error::StorageError;
use crate::tree::inspector;
use crate::tree::node::{FileNode, FolderNode, Node};
use crate::tree::path;
use crate::tree::walker::{Walker, WalkerConfig};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Tree builder for one side of a comparison
pub struct TreeBuilder {
    root: PathBuf,
    walker: Walker,
    parallel: bool,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker: Walker::default(),
            parallel: true,
        }
    }

    /// Set walker config (symlinks, ignore patterns).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker = Walker::with_config(config);
        self
    }

    /// Build sibling entries on the rayon pool (default) or sequentially.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the tree rooted at this builder's path.
    ///
    /// Returns `None` when the root does not exist or can't be stat'ed; the
    /// caller treats that as the whole side missing.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Option<Node> {
        let start = Instant::now();
        info!("Starting tree build");

        if !self.root.exists() {
            info!("Root does not exist");
            return None;
        }

        match self.build_node(&self.root) {
            Ok(node) => {
                info!(
                    node_count = node.node_count(),
                    duration_ms = start.elapsed().as_millis(),
                    "Tree build completed"
                );
                Some(node)
            }
            Err(e) => {
                error!("Tree build failed: {}", e);
                None
            }
        }
    }

    fn build_node(&self, path: &Path) -> Result<Node, StorageError> {
        let metadata = std::fs::metadata(path).map_err(|e| StorageError::from_io(path, e))?;
        let name = path::node_name(path);

        let raw_name = path::raw_name(path);

        if metadata.is_dir() {
            let children = self.build_children(path);
            Ok(Node::Folder(FolderNode {
                raw_name,
                ..FolderNode::new(name, children)
            }))
        } else {
            Ok(Node::File(FileNode {
                raw_name,
                ..FileNode::new(name, inspector::inspect(path))
            }))
        }
    }

    /// Children of `dir` in name order. Unlistable directories come back empty.
    fn build_children(&self, dir: &Path) -> Vec<Node> {
        let entries = match self.walker.list(dir) {
            Ok(entries) => entries,
            Err(StorageError::PermissionDenied(_)) => {
                debug!(dir = %dir.display(), "Permission denied, omitting contents");
                return Vec::new();
            }
            Err(e) => {
                warn!(dir = %dir.display(), "Failed to read directory: {}", e);
                return Vec::new();
            }
        };

        // Indexed map keeps results in listing order regardless of completion order.
        let built: Vec<Option<Node>> = if self.parallel {
            entries
                .par_iter()
                .map(|entry| self.build_entry(entry))
                .collect()
        } else {
            entries
                .iter()
                .map(|entry| self.build_entry(entry))
                .collect()
        };

        built.into_iter().flatten().collect()
    }

    fn build_entry(&self, entry: &Path) -> Option<Node> {
        match self.build_node(entry) {
            Ok(node) => Some(node),
            Err(e) => {
                debug!(path = %entry.display(), "Dropping entry: {}", e);
                None
            }
        }
    }
}
