//! Filesystem Tree
//!
//! Builds one side of a comparison: a name-sorted tree of files and folders,
//! where each file carries its metadata and a content fingerprint.

pub mod builder;
pub mod inspector;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::TreeBuilder;
pub use node::{FileInfo, FileNode, FolderNode, Node, NodeKind, Status};
