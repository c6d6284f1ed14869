//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cukerun - Step execution helpers for Gherkin runners.
#[derive(Debug, Parser)]
#[command(name = "cukerun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default cukerun.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Strip runner internals from a failure trace
    FilterBacktrace(FilterBacktraceArgs),

    /// Print the most severe of the given step statuses
    WorstStatus(WorstStatusArgs),

    /// Resolve the effective keyword of each step in a block
    Keyword(KeywordArgs),
}

/// Arguments for the `filter-backtrace` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterBacktraceArgs {
    /// Trace file with one frame per line (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Keep the trace untouched
    #[arg(long)]
    pub full: bool,

    /// Cut frames down to `file:line`
    #[arg(long)]
    pub truncate: bool,

    /// Also drop native-bridge frames
    #[arg(long)]
    pub native_bridge: bool,

    /// Directory rewritten to `./` (defaults to the project root)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `worst-status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WorstStatusArgs {
    /// Statuses: passed, undefined, pending, skipped or failed
    pub statuses: Vec<String>,
}

/// Arguments for the `keyword` command.
#[derive(Debug, Clone, clap::Args)]
pub struct KeywordArgs {
    /// Keyword language code
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Step keywords of the block, in order
    #[arg(required = true)]
    pub keywords: Vec<String>,
}
