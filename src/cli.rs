//! CLI domain: argument parsing and the command route table.

mod parse;
mod route;

pub use parse::{Cli, Commands};
pub use route::RunContext;
