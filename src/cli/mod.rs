//! Command-line interface for cukerun.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FilterBacktraceArgs, KeywordArgs, WorstStatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
