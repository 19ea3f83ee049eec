//! Config sources: an explicit TOML file, then `LOOP_PARAMS__*` environment
//! variables (e.g. `LOOP_PARAMS__CONTEXT__CURRENT_ITEM_ID=42`).

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

pub const ENV_PREFIX: &str = "LOOP_PARAMS";

/// Add a required TOML config file to the builder.
pub fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    debug!(config_path = %path.display(), "Loading config file");
    builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
}

/// Add environment overrides; they win over every file source.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    )
}
