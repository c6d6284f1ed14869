//! Step definitions and the lookup service that binds them to step text.
//!
//! The matcher itself lives outside this crate; it is reached through the
//! [`Runtime`] trait. What it hands back is a [`StepMatch`].

use std::fmt;
use std::sync::Arc;

use crate::ast::MultilineArg;
use crate::steps::failure::StepFailure;
use crate::steps::invocation::StepInvocation;

/// An action bound to step text.
///
/// Return a [`StepFailure`] through the `anyhow::Error` to report a specific
/// outcome (pending, undefined, table mismatch). Any other error, or a panic,
/// fails the step.
pub trait StepDefinition {
    /// Run the step with its multiline argument, if one is attached.
    fn invoke(&self, arg: Option<&MultilineArg>) -> anyhow::Result<()>;

    /// Where the definition is declared, for reports.
    fn source_location(&self) -> Option<&str> {
        None
    }
}

impl<F> StepDefinition for F
where
    F: Fn(Option<&MultilineArg>) -> anyhow::Result<()>,
{
    fn invoke(&self, arg: Option<&MultilineArg>) -> anyhow::Result<()> {
        self(arg)
    }
}

/// Result of binding step text to a definition.
#[derive(Clone)]
pub enum StepMatch {
    /// A single definition matched.
    Resolved {
        /// The matched definition.
        definition: Arc<dyn StepDefinition>,
        /// The step text that was matched.
        name: String,
    },

    /// Lookup failed (undefined or ambiguous). Kept so that later lookups
    /// on the same invocation are no-ops.
    Unresolved {
        /// The step text that failed to match.
        name: String,
    },
}

impl StepMatch {
    /// Bind `name` to `definition`.
    pub fn resolved(definition: Arc<dyn StepDefinition>, name: impl Into<String>) -> Self {
        StepMatch::Resolved {
            definition,
            name: name.into(),
        }
    }

    /// Sentinel for text that did not bind.
    pub fn unresolved(name: impl Into<String>) -> Self {
        StepMatch::Unresolved { name: name.into() }
    }

    /// Whether a definition was found.
    pub fn is_resolved(&self) -> bool {
        matches!(self, StepMatch::Resolved { .. })
    }

    /// The matched step text.
    pub fn name(&self) -> &str {
        match self {
            StepMatch::Resolved { name, .. } | StepMatch::Unresolved { name } => name,
        }
    }

    /// Declaration site of the definition.
    pub fn source_location(&self) -> Option<&str> {
        match self {
            StepMatch::Resolved { definition, .. } => definition.source_location(),
            StepMatch::Unresolved { .. } => None,
        }
    }

    /// Run the bound definition.
    ///
    /// An unresolved match is never invoked by [`StepInvocation`], since its
    /// lookup failure is already recorded; calling it reports the step as
    /// undefined.
    pub fn invoke(&self, arg: Option<&MultilineArg>) -> anyhow::Result<()> {
        match self {
            StepMatch::Resolved { definition, .. } => definition.invoke(arg),
            StepMatch::Unresolved { name } => Err(StepFailure::undefined(name).into()),
        }
    }
}

impl fmt::Debug for StepMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMatch::Resolved { definition, name } => f
                .debug_struct("Resolved")
                .field("name", name)
                .field("source_location", &definition.source_location())
                .finish(),
            StepMatch::Unresolved { name } => {
                f.debug_struct("Unresolved").field("name", name).finish()
            }
        }
    }
}

/// Services the invocation core needs from the surrounding runner.
pub trait Runtime {
    /// Bind step text to a definition.
    ///
    /// Fails with [`FailureKind::Undefined`](crate::steps::FailureKind::Undefined)
    /// when nothing matches and with
    /// [`FailureKind::Ambiguous`](crate::steps::FailureKind::Ambiguous) when
    /// several definitions match. Any other failure kind is treated like an
    /// ambiguous match.
    fn step_match(&mut self, name: &str) -> Result<StepMatch, StepFailure>;

    /// Called once per lookup attempt, whatever its outcome.
    fn step_visited(&mut self, step: &StepInvocation);

    /// Called after a step definition returned normally.
    fn after_step(&mut self) {}
}
