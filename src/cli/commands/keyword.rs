//! Keyword command implementation.
//!
//! The `cukerun keyword` command resolves the effective keyword of each
//! step in a block, so `And`, `But` and `*` show the keyword they continue.

use tracing::debug;

use crate::cli::args::KeywordArgs;
use crate::error::Result;
use crate::i18n::{Dialect, Keywords};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The keyword command implementation.
pub struct KeywordCommand {
    args: KeywordArgs,
}

impl KeywordCommand {
    /// Create a new keyword command.
    pub fn new(args: KeywordArgs) -> Self {
        Self { args }
    }
}

impl Command for KeywordCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dialect = Dialect::lookup(&self.args.lang)?;
        debug!("Resolving keywords with the {} dialect", dialect.name);

        let keywords = Keywords::new(dialect);
        let block: Vec<&str> = self.args.keywords.iter().map(String::as_str).collect();

        for index in 0..block.len() {
            if let Some(keyword) = keywords.actual_keyword(&block, index) {
                ui.message(keyword.trim_end());
            }
        }

        Ok(CommandResult::success())
    }
}
