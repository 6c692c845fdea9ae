//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TreeDiffConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the standard sources, reading the workspace
    /// file from `working_dir`.
    pub fn load(working_dir: &Path) -> Result<TreeDiffConfig, ConfigError> {
        MergeService::load(working_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<TreeDiffConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
