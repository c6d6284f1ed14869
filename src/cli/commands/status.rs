//! Worst-status command implementation.
//!
//! The `cukerun worst-status` command prints the most severe of the given
//! step statuses.

use crate::cli::args::WorstStatusArgs;
use crate::error::Result;
use crate::steps::{worst_status, StepStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for unusable status input.
const USAGE_EXIT: i32 = 2;

/// The worst-status command implementation.
pub struct WorstStatusCommand {
    args: WorstStatusArgs,
}

impl WorstStatusCommand {
    /// Create a new worst-status command.
    pub fn new(args: WorstStatusArgs) -> Self {
        Self { args }
    }
}

impl Command for WorstStatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut statuses = Vec::with_capacity(self.args.statuses.len());
        for value in &self.args.statuses {
            match value.parse::<StepStatus>() {
                Ok(status) => statuses.push(status),
                Err(e) => {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(USAGE_EXIT));
                }
            }
        }

        match worst_status(statuses) {
            Some(status) => {
                ui.message(status.as_str());
                Ok(CommandResult::success())
            }
            None => {
                ui.error("No statuses given");
                Ok(CommandResult::failure(USAGE_EXIT))
            }
        }
    }
}
