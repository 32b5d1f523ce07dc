//! Tooling & Integration Layer
//!
//! Command-line presentation of the tree: path addressing, confirmation
//! prompts and colored notifications.

pub mod cli;

pub use cli::{Cli, CliContext, CommandOutput, Commands, ConfigCommands};
