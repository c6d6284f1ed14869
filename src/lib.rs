//! cukerun - Step execution core for Gherkin-style test runners.
//!
//! cukerun runs the steps of one scenario block: it binds each step's text
//! to a step definition, invokes it, classifies the outcome, and hands a
//! report to a renderer.
//!
//! # Modules
//!
//! - [`ast`] - Tables and doc strings attached to steps
//! - [`backtrace`] - Failure trace filtering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration loading
//! - [`error`] - Error types and result aliases
//! - [`i18n`] - Keyword dialects and repeat keyword resolution
//! - [`steps`] - Step invocation, status and collections
//! - [`ui`] - Command output
//!
//! # Example
//!
//! ```
//! use cukerun::steps::{worst_status, StepStatus};
//!
//! let statuses = [StepStatus::Passed, StepStatus::Pending, StepStatus::Skipped];
//! assert_eq!(worst_status(statuses), Some(StepStatus::Skipped));
//! ```
//!
//! For a full collection run, see the `steps` module.

pub mod ast;
pub mod backtrace;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod steps;
pub mod ui;

pub use error::{CukeError, Result};
