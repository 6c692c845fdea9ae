//! Environment variable source: TREEDIFF__* with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `TREEDIFF__COMPARE__MIRROR_MISSING=true` sets `compare.mirror_missing`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TREEDIFF")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
