//! CLI route: dispatches parsed commands to the generator.

use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, LoopParamsConfig};
use crate::error::LoopParamsError;
use crate::generator::ParamGenerator;
use crate::rules::rule_names;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loaded configuration a command runs against.
pub struct RunContext {
    config: LoopParamsConfig,
}

impl RunContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, LoopParamsError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn with_config(config: LoopParamsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoopParamsConfig {
        &self.config
    }

    /// Execute a command, returning what should be printed on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, LoopParamsError> {
        match command {
            Commands::Build {
                custom,
                defaults,
                current_item,
                today,
                merged,
                pretty,
            } => {
                let custom_params = read_json(custom)?;
                let default_params = match defaults {
                    Some(path) => read_json(path)?,
                    None => Value::Object(Default::default()),
                };

                let mut context = self.config.context.to_context();
                if current_item.is_some() {
                    context.current_item_id = *current_item;
                }
                if let Some(today) = today {
                    context.today = *today;
                }
                debug!(?context, "Render context");

                let mut generator =
                    ParamGenerator::new(default_params, custom_params).with_context(context);
                generator.process_all();
                let output = if *merged {
                    generator.merged_query_args()
                } else {
                    generator.into_query_args()
                };
                info!(keys = output.len(), "Query args built");

                let output = Value::Object(output);
                let rendered = if *pretty {
                    serde_json::to_string_pretty(&output)?
                } else {
                    serde_json::to_string(&output)?
                };
                Ok(rendered)
            }
            Commands::Rules => Ok(rule_names().join("\n")),
        }
    }
}

fn read_json(path: &Path) -> Result<Value, LoopParamsError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            LoopParamsError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })?
    };
    Ok(serde_json::from_str(&raw)?)
}
