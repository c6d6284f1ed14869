//! Step failure taxonomy.
//!
//! Every condition raised while looking up or invoking a step is turned
//! into a [`StepFailure`]. Failures are recorded on the invocation and
//! never propagated to the caller of `invoke`.

use std::any::Any;
use std::fmt;

use thiserror::Error;

use crate::ast::Table;

/// Classification of a step failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// No step definition matches, or a definition raised it explicitly.
    Undefined,

    /// More than one step definition matches the step text.
    Ambiguous,

    /// The step definition deferred itself.
    Pending,

    /// A table comparison failed; carries the diff table to report instead
    /// of the step's own argument.
    TableMismatch(Table),

    /// Anything else, including assertion failures.
    Generic,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Undefined => "undefined",
            FailureKind::Ambiguous => "ambiguous",
            FailureKind::Pending => "pending",
            FailureKind::TableMismatch(_) => "table mismatch",
            FailureKind::Generic => "error",
        };
        write!(f, "{}", s)
    }
}

/// A failure captured during step lookup or invocation.
///
/// Step definitions return `anyhow::Result<()>`; returning a `StepFailure`
/// through it (e.g. `Err(StepFailure::pending("TODO").into())`) selects the
/// outcome kind. Any other error is classified as [`FailureKind::Generic`].
///
/// # Example
///
/// ```
/// use cukerun::steps::{FailureKind, StepFailure};
///
/// let err: anyhow::Error = StepFailure::pending("not written yet").into();
/// let failure = StepFailure::from_error(err);
/// assert_eq!(failure.kind(), &FailureKind::Pending);
///
/// let failure = StepFailure::from_error(anyhow::anyhow!("boom"));
/// assert_eq!(failure.kind(), &FailureKind::Generic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StepFailure {
    kind: FailureKind,
    message: String,
    backtrace: Option<Vec<String>>,
    nested: bool,
}

impl StepFailure {
    /// Create a failure of the given kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            backtrace: None,
            nested: false,
        }
    }

    /// No step definition matches `step_name`.
    pub fn undefined(step_name: &str) -> Self {
        Self::new(
            FailureKind::Undefined,
            format!("Undefined step: \"{}\"", step_name),
        )
    }

    /// Several step definitions match `step_name`.
    pub fn ambiguous(step_name: &str, candidates: &[String]) -> Self {
        let mut message = format!("Ambiguous match of \"{}\":\n", step_name);
        for candidate in candidates {
            message.push_str("\n  ");
            message.push_str(candidate);
        }
        Self::new(FailureKind::Ambiguous, message)
    }

    /// The step definition is not implemented yet.
    pub fn pending(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Pending, message)
    }

    /// A table comparison failed; `diff` is reported in place of the step's table.
    pub fn table_mismatch(diff: Table, message: impl Into<String>) -> Self {
        Self::new(FailureKind::TableMismatch(diff), message)
    }

    /// Any other failure.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Generic, message)
    }

    /// Attach a backtrace.
    pub fn with_backtrace(mut self, frames: Vec<String>) -> Self {
        self.backtrace = Some(frames);
        self
    }

    /// Mark the failure as raised by a sub-step called from another step.
    pub fn into_nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Classify an error returned by a step definition.
    pub fn from_error(err: anyhow::Error) -> Self {
        match err.downcast::<StepFailure>() {
            Ok(failure) => failure,
            Err(other) => Self::generic(format!("{:#}", other)),
        }
    }

    /// Classify a panic payload caught around a step definition.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "step panicked".to_string()
        };
        Self::generic(message)
    }

    /// The failure classification.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace frames, if any were captured.
    pub fn backtrace(&self) -> Option<&[String]> {
        self.backtrace.as_deref()
    }

    /// Mutable access to the trace, for recording policy.
    pub(crate) fn backtrace_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.backtrace
    }

    /// Whether the failure came from a sub-step.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Whether this is an undefined-step failure.
    pub fn is_undefined(&self) -> bool {
        matches!(self.kind, FailureKind::Undefined)
    }
}
