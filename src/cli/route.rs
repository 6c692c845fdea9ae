//! CLI route: single route table and run context. Dispatches to the comparer and presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_comparison_json, format_comparison_text, format_details_json, format_details_text,
    format_summary_table,
};
use crate::compare::{CompareOptions, Comparer};
use crate::config::{ConfigLoader, TreeDiffConfig};
use crate::error::CompareError;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded configuration.
/// Built from an optional config path using ConfigLoader only.
pub struct RunContext {
    config: TreeDiffConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from an optional config path.
    ///
    /// Without a path, configuration is layered from the user config file,
    /// `.treediff.toml` in the current directory, and `TREEDIFF__*` variables.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CompareError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    CompareError::ConfigError(format!("Failed to read current directory: {}", e))
                })?;
                ConfigLoader::load(&cwd)?
            }
        };
        Self::from_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: TreeDiffConfig) -> Result<Self, CompareError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CompareError::ConfigError(messages.join("; "))
        })?;
        Ok(Self {
            config,
            color: std::io::stdout().is_terminal(),
        })
    }

    /// Force colored text output on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &TreeDiffConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, CompareError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command.name(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis(),
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, CompareError> {
        match command {
            Commands::Compare {
                dir1,
                dir2,
                format,
                summary_only,
                mirror_missing,
                sequential,
            } => {
                let comparer = self.comparer(*mirror_missing, *sequential);
                let comparison = comparer.compare(dir1, dir2)?;
                match (*format, *summary_only) {
                    (OutputFormat::Json, true) => {
                        Ok(serde_json::to_string_pretty(&comparison.stats())?)
                    }
                    (OutputFormat::Json, false) => format_comparison_json(&comparison),
                    (OutputFormat::Text, true) => Ok(format_summary_table(&comparison.stats())),
                    (OutputFormat::Text, false) => {
                        Ok(format_comparison_text(&comparison, self.color))
                    }
                }
            }
            Commands::Details {
                dir1,
                dir2,
                path,
                format,
            } => {
                let comparer = self.comparer(false, false);
                let comparison = comparer.compare(dir1, dir2)?;
                let (left, right) = comparison.find(path);
                debug!(
                    path = %path,
                    left = left.is_some(),
                    right = right.is_some(),
                    "Resolved details lookup"
                );
                if left.is_none() && right.is_none() {
                    return Err(CompareError::NodeNotFound(path.clone()));
                }
                match *format {
                    OutputFormat::Json => format_details_json(path, left, right),
                    OutputFormat::Text => Ok(format_details_text(
                        path,
                        (comparison.dir1.as_str(), left),
                        (comparison.dir2.as_str(), right),
                    )),
                }
            }
        }
    }

    /// Comparer from the loaded configuration with CLI flags applied on top.
    fn comparer(&self, mirror_missing: bool, sequential: bool) -> Comparer {
        let base = &self.config.compare;
        let options = CompareOptions {
            parallel: base.parallel && !sequential,
            mirror_missing: base.mirror_missing || mirror_missing,
        };
        Comparer::new(self.config.walker.clone(), options)
    }
}
