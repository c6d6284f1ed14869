//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed through [`CommandDispatcher`].

pub mod backtrace;
pub mod dispatcher;
pub mod keyword;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
