//! Merge rules: defaults applied beneath every source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("walker.follow_symlinks", true)?
        .set_default("compare.parallel", true)?
        .set_default("compare.mirror_missing", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.output", "stderr")
}
