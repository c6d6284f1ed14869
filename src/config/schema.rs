//! Configuration schema definitions for cukerun.
//!
//! This module contains the structs that map to the `cukerun.yml` file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::backtrace::{BacktraceFilter, BacktraceOptions};
use crate::error::{CukeError, Result};

/// Run configuration read by step invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Look up steps without invoking them
    #[serde(default, skip_serializing_if = "is_false")]
    pub dry_run: bool,

    /// Report undefined steps as failures
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Failure trace handling
    pub backtrace: BacktraceSettings,
}

/// Failure trace settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktraceSettings {
    /// Show full, unfiltered traces
    #[serde(default, skip_serializing_if = "is_false")]
    pub full: bool,

    /// Cut frames down to `file:line`
    #[serde(default, skip_serializing_if = "is_false")]
    pub truncate: bool,

    /// Drop native-bridge frames of an alternate host runtime
    #[serde(default, skip_serializing_if = "is_false")]
    pub native_bridge: bool,

    /// Directory rewritten to `./` in traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Additional internal-frame regexes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_patterns: Vec<String>,
}

impl RunConfig {
    /// Filter switches derived from the backtrace settings.
    pub fn backtrace_options(&self) -> BacktraceOptions {
        BacktraceOptions {
            full: self.backtrace.full,
            truncate: self.backtrace.truncate,
            native_bridge: self.backtrace.native_bridge,
            cwd: self.backtrace.cwd.clone(),
            patterns: self.backtrace.filter_patterns.clone(),
        }
    }

    /// Build a backtrace filter for the current settings.
    pub fn backtrace_filter(&self) -> BacktraceFilter {
        BacktraceFilter::new(&self.backtrace_options())
    }

    /// Check that every custom filter pattern compiles.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.backtrace.filter_patterns {
            regex::Regex::new(pattern).map_err(|e| CukeError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let config = RunConfig::default();
        assert!(!config.dry_run);
        assert!(!config.strict);
        assert!(!config.backtrace.full);
        assert!(config.backtrace.cwd.is_none());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
dry_run: true
strict: true
backtrace:
  truncate: true
  native_bridge: true
  cwd: /work
  filter_patterns:
    - support/env\.rs
"#;
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.dry_run);
        assert!(config.strict);
        assert!(config.backtrace.truncate);
        assert!(config.backtrace.native_bridge);
        assert_eq!(config.backtrace.cwd, Some(PathBuf::from("/work")));
        assert_eq!(config.backtrace.filter_patterns, vec![r"support/env\.rs"]);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: RunConfig = serde_yaml::from_str("strict: true").unwrap();
        assert!(config.strict);
        assert_eq!(config.backtrace, BacktraceSettings::default());
    }

    #[test]
    fn serialization_skips_defaults() {
        let yaml = serde_yaml::to_string(&RunConfig::default()).unwrap();
        assert!(!yaml.contains("dry_run"));
        assert!(!yaml.contains("strict"));
    }

    #[test]
    fn backtrace_options_mirror_settings() {
        let config = RunConfig {
            backtrace: BacktraceSettings {
                full: true,
                cwd: Some(PathBuf::from("/work")),
                filter_patterns: vec!["x".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let options = config.backtrace_options();
        assert!(options.full);
        assert!(!options.truncate);
        assert_eq!(options.cwd, Some(PathBuf::from("/work")));
        assert_eq!(options.patterns, vec!["x"]);
        assert!(config.backtrace_filter().is_full());
    }

    #[test]
    fn validate_rejects_broken_pattern() {
        let mut config = RunConfig::default();
        config.backtrace.filter_patterns = vec!["ok/".to_string(), "(".to_string()];

        let err = config.validate().unwrap_err();
        assert!(matches!(err, CukeError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(RunConfig::default().validate().is_ok());
    }
}
