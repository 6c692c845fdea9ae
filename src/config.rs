//! Configuration System
//!
//! Layered configuration for comparisons: built-in defaults, a user-level file,
//! a file in the working directory, then `TREEDIFF__*` environment overrides.

use crate::compare::{CompareOptions, Comparer};
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeDiffConfig {
    /// Directory listing settings shared by both sides
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Comparison settings
    #[serde(default)]
    pub compare: CompareOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Walker(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Walker(msg) => write!(f, "Walker: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TreeDiffConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for pattern in &self.walker.ignore_patterns {
            if pattern.trim().is_empty() {
                errors.push(ValidationError::Walker(
                    "Ignore pattern cannot be empty".to_string(),
                ));
            } else if pattern.contains('/') || pattern.contains('\\') {
                errors.push(ValidationError::Walker(format!(
                    "Ignore pattern '{}' must be a single entry name",
                    pattern
                )));
            }
        }

        if let Err(e) = crate::logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = crate::logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// A comparer running with this configuration.
    pub fn comparer(&self) -> Comparer {
        Comparer::new(self.walker.clone(), self.compare.clone())
    }
}
