//! Configuration System
//!
//! Layered configuration for the CLI: built-in defaults, an optional TOML
//! file, then `LOOP_PARAMS__` environment variables. Covers logging and the
//! render context used when no flags override it.

use crate::context::StaticContext;
use crate::error::LoopParamsError;
use crate::logging::LoggingConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge_policy;
mod sources;

pub use sources::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoopParamsConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Render context defaults
    #[serde(default)]
    pub context: ContextConfig,
}

/// Render context settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Item being rendered (used by exclude_current and post_parent)
    pub current_item_id: Option<u64>,

    /// Fixed render date; today (UTC) when unset
    pub today: Option<NaiveDate>,
}

impl ContextConfig {
    pub fn to_context(&self) -> StaticContext {
        let mut context = StaticContext::default();
        context.current_item_id = self.current_item_id;
        if let Some(today) = self.today {
            context.today = today;
        }
        context
    }
}

impl LoopParamsConfig {
    pub fn validate(&self) -> Result<(), LoopParamsError> {
        self.logging
            .validate()
            .map_err(|e| LoopParamsError::ConfigError(format!("logging: {}", e)))
    }
}

/// Loads [`LoopParamsConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults plus environment, and the given file if any.
    pub fn load(config_path: Option<&Path>) -> Result<LoopParamsConfig, LoopParamsError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = config_path {
            builder = sources::add_file(builder, path);
        }
        builder = sources::add_environment(builder);

        let config: LoopParamsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
