//! Run configuration for cukerun.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment switches in [`loader`]
//!
//! # Example
//!
//! ```
//! use cukerun::config::{load_config, CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE), "strict: true").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(config.strict);
//! assert_eq!(config.backtrace.cwd.as_deref(), Some(temp.path()));
//! ```
//!
//! # Environment switches
//!
//! - `CUKERUN_BACKTRACE` turns on full, unfiltered traces
//! - `CUKERUN_TRUNCATE_OUTPUT` cuts trace frames down to `file:line`

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env, find_config, is_enabled, load_config, load_config_file, parse_config,
    BACKTRACE_ENV, CONFIG_FILE, TRUNCATE_ENV,
};
pub use schema::{BacktraceSettings, RunConfig};
