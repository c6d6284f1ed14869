//! Command output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout and stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use cukerun::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("passed");
//! assert_eq!(ui.messages(), ["passed"]);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for command output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a result line.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
