//! CLI command handlers for `etn`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod courses;
pub mod inquire;
pub mod quote;
