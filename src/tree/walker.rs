//! Directory listing for the tree builder

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Filesystem walker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: true, entries are stat'ed through links)
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
    /// Entry names to leave out of the tree (e.g., ".git", "node_modules")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_follow_symlinks() -> bool {
    true
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: default_follow_symlinks(),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Lists one directory level at a time, sorted by file name.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with custom configuration
    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// List the entries of `dir`, sorted by name in byte order.
    ///
    /// Fails only when the directory itself can't be read. Entries that error
    /// individually (e.g. dangling symlinks) are skipped, as are ignored
    /// names and, when not following links, symlinks.
    pub fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let message = e.to_string();
                    return Err(match e.into_io_error() {
                        Some(io) => StorageError::from_io(dir, io),
                        None => StorageError::InvalidPath(message),
                    });
                }
                Err(e) => {
                    debug!(dir = %dir.display(), "Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.path_is_symlink() && !self.config.follow_symlinks {
                continue;
            }
            if self.should_ignore(entry.file_name().to_string_lossy().as_ref()) {
                continue;
            }

            entries.push(entry.into_path());
        }

        Ok(entries)
    }

    /// Check if an entry name matches an ignore pattern
    fn should_ignore(&self, name: &str) -> bool {
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern == name)
    }
}
