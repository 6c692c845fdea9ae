//! Filesystem node types
//!
//! A built tree is a plain owned value: folders own their children, sorted by
//! name. The same types carry the differ's annotations, so a tree before and
//! after diffing differs only in its `status` (and `placeholder`) fields.

use crate::types::{hash_hex, Hash};
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Comparison outcome attached to every node after diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Same,
    Different,
    Missing,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Same => write!(f, "same"),
            Status::Different => write!(f, "different"),
            Status::Missing => write!(f, "missing"),
        }
    }
}

/// Node kind, used where only the shape of an entry matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// Metadata reported by the file inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Logical length in bytes
    pub size: u64,
    /// Bytes allocated on storage; equals `size` where the platform can't say
    pub size_on_disk: u64,
    /// Epoch seconds. Inode change time on Unix, creation time elsewhere.
    pub created: f64,
    pub modified: f64,
    pub accessed: f64,
    /// Whole-file digest; `None` for non-regular files or unreadable content
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hash_hex")]
    pub content_hash: Option<Hash>,
}

/// File (or any non-directory entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    /// Absent when the entry could not be inspected at all, and on placeholders
    #[serde(flatten)]
    pub info: Option<FileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub placeholder: bool,
    /// On-disk name when it isn't valid UTF-8; `name` then holds an escaped form
    #[serde(skip)]
    pub raw_name: Option<OsString>,
}

/// Directory node; `children` are sorted by name and unique within the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub placeholder: bool,
    #[serde(skip)]
    pub raw_name: Option<OsString>,
}

/// One entry of a directory tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FileNode {
    pub fn new(name: impl Into<String>, info: Option<FileInfo>) -> Self {
        Self {
            name: name.into(),
            info,
            status: None,
            placeholder: false,
            raw_name: None,
        }
    }

    /// The content fingerprint, if the file was hashed.
    pub fn content_hash(&self) -> Option<&Hash> {
        self.info.as_ref().and_then(|info| info.content_hash.as_ref())
    }
}

impl FolderNode {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
            status: None,
            placeholder: false,
            raw_name: None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    /// Identity of this entry among its siblings: the on-disk name.
    pub fn os_name(&self) -> &OsStr {
        let (name, raw_name) = match self {
            Node::File(file) => (&file.name, &file.raw_name),
            Node::Folder(folder) => (&folder.name, &folder.raw_name),
        };
        raw_name.as_deref().unwrap_or_else(|| OsStr::new(name))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Node::File(file) => file.status,
            Node::Folder(folder) => folder.status,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        match self {
            Node::File(file) => file.placeholder,
            Node::Folder(folder) => folder.placeholder,
        }
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File(_) => &[],
            Node::Folder(folder) => &folder.children,
        }
    }

    /// Find a descendant by `/`-separated path relative to this node.
    ///
    /// An empty path (or one made only of separators) returns `self`.
    pub fn find(&self, relative_path: &str) -> Option<&Node> {
        relative_path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .try_fold(self, |current, segment| match current {
                Node::Folder(folder) => folder.child(segment),
                Node::File(_) => None,
            })
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}
