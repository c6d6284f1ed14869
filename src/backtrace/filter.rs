//! Backtrace filtering.
//!
//! Removes frames that point into the runner, assertion libraries or
//! installed packages, so a failure report starts at the user's own code.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{trace, warn};

use crate::steps::failure::StepFailure;

/// A pattern that identifies internal trace frames.
#[derive(Debug, Clone)]
pub struct FramePattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex matched anywhere in a frame.
    pub regex: Regex,
}

/// Built-in internal-frame patterns.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("vendored", r"vendor/rails|/vendor/"),
    ("runner_library", r"lib/cucumber|cukerun/src/"),
    ("runner_entry_point", r"bin/cucumber:|bin/cukerun:"),
    ("assertions", r"lib/rspec|minitest|test/unit|pretty_assertions"),
    ("package_manager", r"gems/|/\.gem/|/\.cargo/registry/|/\.cargo/git/"),
    ("toolchain", r"/rustc/[0-9a-f]+/library/"),
];

/// Frames produced by a native bridge when the host runs on an alternate runtime.
pub const NATIVE_BRIDGE_PATTERNS: &[(&str, &str)] = &[("native_bridge", r"org/jruby")];

static BUILTIN: LazyLock<Vec<FramePattern>> = LazyLock::new(|| compile(BUILTIN_PATTERNS));

static NATIVE_BRIDGE: LazyLock<Vec<FramePattern>> =
    LazyLock::new(|| compile(NATIVE_BRIDGE_PATTERNS));

/// Everything left of the call context in `file:line:in ...` or `file:line: in ...`.
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?):\s?in ").expect("LOCATION must compile"));

fn compile(patterns: &[(&str, &str)]) -> Vec<FramePattern> {
    patterns
        .iter()
        .map(|(name, pattern)| FramePattern {
            name: name.to_string(),
            regex: Regex::new(pattern).expect("built-in frame patterns must compile"),
        })
        .collect()
}

/// Switches controlling how traces are filtered.
///
/// These are the process-wide toggles of the runner, passed in explicitly
/// so the filter itself reads no ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacktraceOptions {
    /// Keep the raw trace untouched.
    pub full: bool,

    /// Reduce each kept frame to its `file:line` location.
    pub truncate: bool,

    /// Also drop native-bridge frames.
    pub native_bridge: bool,

    /// Directory whose prefix is rewritten to `./`.
    pub cwd: Option<PathBuf>,

    /// Extra internal-frame regexes.
    pub patterns: Vec<String>,
}

/// Strips internal frames from captured traces.
///
/// # Example
///
/// ```
/// use cukerun::backtrace::{BacktraceFilter, BacktraceOptions};
///
/// let filter = BacktraceFilter::new(&BacktraceOptions {
///     cwd: Some("/cwd".into()),
///     ..Default::default()
/// });
/// let mut frames = vec![
///     "/cwd/app.rb:1: in `x`".to_string(),
///     "/gems/lib/internal.rb:5: in `y`".to_string(),
/// ];
///
/// assert_eq!(filter.filtered_backtrace(&mut frames), vec!["./app.rb:1: in `x`"]);
/// ```
#[derive(Debug, Clone)]
pub struct BacktraceFilter {
    full: bool,
    truncate: bool,
    cwd_prefix: Option<String>,
    patterns: Vec<FramePattern>,
}

impl BacktraceFilter {
    /// Build a filter from options.
    ///
    /// Invalid custom patterns are logged and ignored.
    pub fn new(options: &BacktraceOptions) -> Self {
        let mut patterns = BUILTIN.clone();
        if options.native_bridge {
            patterns.extend(NATIVE_BRIDGE.iter().cloned());
        }

        for pattern in &options.patterns {
            match Regex::new(pattern) {
                Ok(regex) => patterns.push(FramePattern {
                    name: format!("custom:{}", pattern),
                    regex,
                }),
                Err(e) => warn!("Ignoring invalid backtrace filter pattern '{}': {}", pattern, e),
            }
        }

        // An empty cwd would turn into a bare "/" prefix.
        let cwd_prefix = options
            .cwd
            .as_ref()
            .filter(|cwd| !cwd.as_os_str().is_empty())
            .map(|cwd| {
                let cwd = cwd.to_string_lossy();
                format!("{}/", cwd.trim_end_matches('/'))
            });

        Self {
            full: options.full,
            truncate: options.truncate,
            cwd_prefix,
            patterns,
        }
    }

    /// Whether the filter leaves traces untouched.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Get the number of internal-frame patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check if a frame points into runner or library internals.
    pub fn is_internal(&self, frame: &str) -> bool {
        self.patterns.iter().any(|p| p.regex.is_match(frame))
    }

    /// Filter a raw trace.
    ///
    /// Working-directory prefixes are rewritten to `./` in `raw` itself, so
    /// the caller's copy reflects the rewrite too. Internal frames are then
    /// dropped and, when truncation is on, each frame is cut down to its
    /// location. With `full` set the trace is returned unchanged.
    pub fn filtered_backtrace(&self, raw: &mut [String]) -> Vec<String> {
        if self.full {
            return raw.to_vec();
        }

        if let Some(prefix) = &self.cwd_prefix {
            for frame in raw.iter_mut() {
                if let Some(rest) = frame.strip_prefix(prefix.as_str()) {
                    *frame = format!("./{}", rest);
                }
            }
        }

        let kept = raw
            .iter()
            .filter(|frame| !self.is_internal(frame))
            .map(|frame| {
                if self.truncate {
                    truncate_frame(frame)
                } else {
                    frame.clone()
                }
            })
            .collect::<Vec<_>>();

        trace!("Backtrace filtered from {} to {} frames", raw.len(), kept.len());
        kept
    }

    /// Replace a failure's trace with its filtered form.
    pub fn filter_failure(&self, failure: &mut StepFailure) {
        if self.full {
            return;
        }
        if let Some(frames) = failure.backtrace_mut() {
            let filtered = self.filtered_backtrace(frames);
            *frames = filtered;
        }
    }
}

impl Default for BacktraceFilter {
    fn default() -> Self {
        Self::new(&BacktraceOptions::default())
    }
}

fn truncate_frame(frame: &str) -> String {
    LOCATION
        .captures(frame)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| frame.to_string())
}
