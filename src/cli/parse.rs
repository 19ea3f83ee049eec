//! CLI parse: clap types for loop-params. No behavior; definitions only.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate content query args from listing block params
#[derive(Parser)]
#[command(name = "loop-params")]
#[command(about = "Generate content query args from listing block params")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
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
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every active rule and print the query args as JSON
    Build {
        /// Custom params JSON file ("-" reads stdin)
        #[arg(long)]
        custom: PathBuf,
        /// Default params JSON file
        #[arg(long)]
        defaults: Option<PathBuf>,
        /// Identifier of the item being rendered
        #[arg(long)]
        current_item: Option<u64>,
        /// Render date (YYYY-MM-DD) for relative date ranges
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Layer the query args over the default params
        #[arg(long)]
        merged: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List rule names in evaluation order
    Rules,
}
