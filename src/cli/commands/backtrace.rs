//! Filter-backtrace command implementation.
//!
//! The `cukerun filter-backtrace` command reads a failure trace, one frame
//! per line, and prints what a step report would show for it.

use std::fs;
use std::io::{self, Read};

use tracing::debug;

use crate::cli::args::FilterBacktraceArgs;
use crate::config::RunConfig;
use crate::error::{CukeError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The filter-backtrace command implementation.
pub struct FilterBacktraceCommand {
    config: RunConfig,
    args: FilterBacktraceArgs,
}

impl FilterBacktraceCommand {
    /// Create a new filter-backtrace command; flags override `config`.
    pub fn new(mut config: RunConfig, args: FilterBacktraceArgs) -> Self {
        config.backtrace.full |= args.full;
        config.backtrace.truncate |= args.truncate;
        config.backtrace.native_bridge |= args.native_bridge;
        if let Some(cwd) = &args.cwd {
            config.backtrace.cwd = Some(cwd.clone());
        }
        Self { config, args }
    }

    /// Effective configuration after flag overrides.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Filter a trace given as text.
    pub fn filter(&self, trace: &str) -> Vec<String> {
        let mut frames: Vec<String> = trace
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        self.config.backtrace_filter().filtered_backtrace(&mut frames)
    }

    fn read_trace(&self) -> Result<String> {
        match &self.args.file {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                CukeError::Other(anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
            }),
            None => {
                let mut trace = String::new();
                io::stdin().read_to_string(&mut trace)?;
                Ok(trace)
            }
        }
    }
}

impl Command for FilterBacktraceCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let trace = self.read_trace()?;
        let frames = self.filter(&trace);
        debug!("Printing {} frames", frames.len());

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&frames).map_err(|e| CukeError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for frame in &frames {
                ui.message(frame);
            }
        }
        Ok(CommandResult::success())
    }
}
