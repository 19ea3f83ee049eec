//! Loop Params: Rule-Driven Query Parameter Generation
//!
//! Builds the query args for a content listing block by layering a fixed,
//! ordered set of param rules (exclusions, pagination, date/meta/taxonomy
//! filters, parent constraints) over the block's default params.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod identity;
pub mod logging;
pub mod params;
pub mod rules;

pub use context::{RenderContext, StaticContext};
pub use error::LoopParamsError;
pub use generator::{generate_query_args, ParamGenerator};
pub use params::ParamMap;
