//! Synchronized structural diff of two trees
//!
//! The differ borrows both input trees and builds two fresh annotated trees.
//! Children are merged by name: the union of both sides' names, in sorted
//! order, is diffed pairwise, and each side keeps whatever the pair produced
//! for it.
//!
//! Status rules:
//! - entry on one side only: that side's copy, and every descendant, is
//!   `Missing`; the other side gets nothing (or a placeholder when mirroring)
//! - two files: `Same` iff both fingerprints exist and are equal
//! - two folders: `Same`, whatever their children turn out to be
//! - file against folder: both `Different`, children not merged

use crate::tree::node::{FileNode, FolderNode, Node, Status};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;

/// Annotated results for side A and side B.
pub type DiffPair = (Option<Node>, Option<Node>);

/// Differ configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Synthesize `Missing` placeholders on the side where an entry is absent
    #[serde(default)]
    pub mirror_missing: bool,
}

/// Diff two trees with default options.
pub fn diff(a: Option<&Node>, b: Option<&Node>) -> DiffPair {
    Differ::default().diff(a, b)
}

#[derive(Debug, Clone, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn diff(&self, a: Option<&Node>, b: Option<&Node>) -> DiffPair {
        match (a, b) {
            (None, None) => (None, None),
            (None, Some(b)) => (self.mirror(b), Some(stamp_missing(b))),
            (Some(a), None) => (Some(stamp_missing(a)), self.mirror(a)),
            (Some(Node::File(a)), Some(Node::File(b))) => {
                let status = file_status(a, b);
                (
                    Some(Node::File(stamp_file(a, status))),
                    Some(Node::File(stamp_file(b, status))),
                )
            }
            (Some(Node::Folder(a)), Some(Node::Folder(b))) => {
                let (children_a, children_b) = self.merge_children(a, b);
                (
                    Some(Node::Folder(stamp_folder(a, children_a, Status::Same))),
                    Some(Node::Folder(stamp_folder(b, children_b, Status::Same))),
                )
            }
            (Some(a), Some(b)) => (Some(stamp_mismatched(a)), Some(stamp_mismatched(b))),
        }
    }

    fn merge_children(&self, a: &FolderNode, b: &FolderNode) -> (Vec<Node>, Vec<Node>) {
        let left: BTreeMap<&OsStr, &Node> =
            a.children.iter().map(|c| (c.os_name(), c)).collect();
        let right: BTreeMap<&OsStr, &Node> =
            b.children.iter().map(|c| (c.os_name(), c)).collect();
        let names: BTreeSet<&OsStr> = left.keys().chain(right.keys()).copied().collect();

        let mut merged_a = Vec::with_capacity(names.len());
        let mut merged_b = Vec::with_capacity(names.len());
        for name in names {
            let (child_a, child_b) =
                self.diff(left.get(name).copied(), right.get(name).copied());
            merged_a.extend(child_a);
            merged_b.extend(child_b);
        }
        (merged_a, merged_b)
    }

    fn mirror(&self, node: &Node) -> Option<Node> {
        self.options.mirror_missing.then(|| placeholder(node))
    }
}

/// Content-only comparison; metadata never affects the outcome.
fn file_status(a: &FileNode, b: &FileNode) -> Status {
    match (a.content_hash(), b.content_hash()) {
        (Some(hash_a), Some(hash_b)) if hash_a == hash_b => Status::Same,
        _ => Status::Different,
    }
}

fn stamp_file(file: &FileNode, status: Status) -> FileNode {
    FileNode {
        status: Some(status),
        ..file.clone()
    }
}

fn stamp_folder(folder: &FolderNode, children: Vec<Node>, status: Status) -> FolderNode {
    FolderNode {
        name: folder.name.clone(),
        children,
        status: Some(status),
        placeholder: folder.placeholder,
        raw_name: folder.raw_name.clone(),
    }
}

/// Copy of `node` with every node in the subtree marked `Missing`.
fn stamp_missing(node: &Node) -> Node {
    match node {
        Node::File(file) => Node::File(stamp_file(file, Status::Missing)),
        Node::Folder(folder) => {
            let children = folder.children.iter().map(stamp_missing).collect();
            Node::Folder(stamp_folder(folder, children, Status::Missing))
        }
    }
}

/// `Different` at the top; a folder's contents have no counterpart and are `Missing`.
fn stamp_mismatched(node: &Node) -> Node {
    match node {
        Node::File(file) => Node::File(stamp_file(file, Status::Different)),
        Node::Folder(folder) => {
            let children = folder.children.iter().map(stamp_missing).collect();
            Node::Folder(stamp_folder(folder, children, Status::Different))
        }
    }
}

/// Name-and-kind stand-in for an entry that only exists on the other side.
fn placeholder(node: &Node) -> Node {
    match node {
        Node::File(file) => Node::File(FileNode {
            name: file.name.clone(),
            info: None,
            status: Some(Status::Missing),
            placeholder: true,
            raw_name: file.raw_name.clone(),
        }),
        Node::Folder(folder) => Node::Folder(FolderNode {
            name: folder.name.clone(),
            children: folder.children.iter().map(placeholder).collect(),
            status: Some(Status::Missing),
            placeholder: true,
            raw_name: folder.raw_name.clone(),
        }),
    }
}
