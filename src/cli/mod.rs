//! CLI module for callsight
//!
//! Contains argument parsing and command implementations.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::{AnalyzeArgs, Cli, Commands, ConfigCommand};
