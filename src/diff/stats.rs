//! Aggregate counts over a pair of annotated trees

use crate::tree::node::{Node, Status};
use serde::{Deserialize, Serialize};

/// Status counts for file nodes across both sides, plus folder count.
///
/// A file present on both sides counts once per side. Placeholders are not
/// counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub same: u64,
    pub different: u64,
    pub missing: u64,
    pub folders: u64,
}

impl DiffStats {
    pub fn from_trees(a: Option<&Node>, b: Option<&Node>) -> Self {
        let mut stats = Self::default();
        for tree in [a, b].into_iter().flatten() {
            stats.count(tree);
        }
        stats
    }

    pub fn files(&self) -> u64 {
        self.same + self.different + self.missing
    }

    /// True when no file differs or is missing on either side.
    pub fn is_identical(&self) -> bool {
        self.different == 0 && self.missing == 0
    }

    fn count(&mut self, node: &Node) {
        if node.is_placeholder() {
            return;
        }
        match node {
            Node::File(file) => match file.status {
                Some(Status::Same) => self.same += 1,
                Some(Status::Different) => self.different += 1,
                Some(Status::Missing) => self.missing += 1,
                None => {}
            },
            Node::Folder(folder) => {
                self.folders += 1;
                for child in &folder.children {
                    self.count(child);
                }
            }
        }
    }
}
