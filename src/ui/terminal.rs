//! Terminal output.

use super::UserInterface;

/// Writes results to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalUI;

impl TerminalUI {
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }
}
