//! Configuration file discovery, loading and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::RunConfig;
use crate::error::{CukeError, Result};

/// Config file looked up in the project root.
pub const CONFIG_FILE: &str = "cukerun.yml";

/// Environment switch requesting full, unfiltered traces.
pub const BACKTRACE_ENV: &str = "CUKERUN_BACKTRACE";

/// Environment switch requesting truncated trace frames.
pub const TRUNCATE_ENV: &str = "CUKERUN_TRUNCATE_OUTPUT";

/// Find `cukerun.yml` in the project root.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CukeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CukeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse config YAML; `source_path` is only used in error messages.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunConfig> {
    if content.trim().is_empty() {
        return Ok(RunConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CukeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Whether an environment switch value turns the switch on.
///
/// Any non-empty value except `0`, `false`, `no` and `off` enables it.
pub fn is_enabled(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !["0", "false", "no", "off"]
            .iter()
            .any(|off| value.eq_ignore_ascii_case(off))
}

/// Apply environment switches on top of a config.
///
/// Switches only ever turn settings on; an unset or disabled variable
/// leaves the file setting alone.
pub fn apply_env<K, V>(config: &mut RunConfig, vars: impl IntoIterator<Item = (K, V)>)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in vars {
        let enabled = is_enabled(value.as_ref());
        match key.as_ref() {
            BACKTRACE_ENV if enabled => {
                debug!("{} set, using full backtraces", BACKTRACE_ENV);
                config.backtrace.full = true;
            }
            TRUNCATE_ENV if enabled => {
                debug!("{} set, truncating backtraces", TRUNCATE_ENV);
                config.backtrace.truncate = true;
            }
            _ => {}
        }
    }
}

/// Resolve the effective run configuration.
///
/// Uses `config_override` when given, else `cukerun.yml` in the project
/// root, else defaults. Environment switches are applied on top, and the
/// trace working directory defaults to a non-empty project root.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RunConfig> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(project_root),
    };

    let mut config = match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => RunConfig::default(),
    };

    apply_env(&mut config, std::env::vars());

    if config.backtrace.cwd.is_none() && !project_root.as_os_str().is_empty() {
        config.backtrace.cwd = Some(project_root.to_path_buf());
    }

    Ok(config)
}
