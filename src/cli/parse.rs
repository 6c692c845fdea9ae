//! CLI parse: clap types for treediff. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Treediff CLI - Compare two directory trees by name and content
#[derive(Parser)]
#[command(name = "treediff")]
#[command(about = "Compare two directory trees and report same, different and missing entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Report format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two directories and print both annotated trees
    Compare {
        /// First directory
        dir1: String,
        /// Second directory
        dir2: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print only the summary table
        #[arg(long)]
        summary_only: bool,
        /// Show entries absent on one side as missing placeholders on that side
        #[arg(long)]
        mirror_missing: bool,
        /// Build both trees on the current thread
        #[arg(long)]
        sequential: bool,
    },
    /// Show metadata for one entry on both sides
    Details {
        /// First directory
        dir1: String,
        /// Second directory
        dir2: String,
        /// Path relative to both roots, '/'-separated
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Compare { .. } => "compare",
            Commands::Details { .. } => "details",
        }
    }
}
