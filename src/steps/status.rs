//! Step outcome kinds and severity aggregation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CukeError;

/// Outcome of a step invocation.
///
/// Variants are declared in severity order, best to worst, so the derived
/// `Ord` is the severity order: `Passed < Undefined < Pending < Skipped < Failed`.
/// A step that was never reached counts as worse than one that had no
/// definition, and only an explicit failure is worse than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The bound action returned normally.
    Passed,

    /// No step definition matches the step text.
    Undefined,

    /// The bound action deferred itself.
    Pending,

    /// The step was not invoked.
    Skipped,

    /// The step raised an error, or its lookup was ambiguous.
    Failed,
}

/// All statuses, best to worst.
pub const SEVERITY: [StepStatus; 5] = [
    StepStatus::Passed,
    StepStatus::Undefined,
    StepStatus::Pending,
    StepStatus::Skipped,
    StepStatus::Failed,
];

impl StepStatus {
    /// Position in the severity order (0 is best).
    pub fn severity(&self) -> usize {
        *self as usize
    }

    /// Lowercase name used in reports and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Passed => "passed",
            StepStatus::Undefined => "undefined",
            StepStatus::Pending => "pending",
            StepStatus::Skipped => "skipped",
            StepStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = CukeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEVERITY
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CukeError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// Reduce a collection of statuses to the worst one.
///
/// Returns `None` for an empty collection: there is no meaningful
/// aggregate of nothing.
///
/// # Example
///
/// ```
/// use cukerun::steps::{worst_status, StepStatus};
///
/// let worst = worst_status([StepStatus::Passed, StepStatus::Failed, StepStatus::Pending]);
/// assert_eq!(worst, Some(StepStatus::Failed));
/// assert_eq!(worst_status(Vec::new()), None);
/// ```
pub fn worst_status(statuses: impl IntoIterator<Item = StepStatus>) -> Option<StepStatus> {
    statuses.into_iter().max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_is_total() {
        assert!(StepStatus::Passed < StepStatus::Undefined);
        assert!(StepStatus::Undefined < StepStatus::Pending);
        assert!(StepStatus::Pending < StepStatus::Skipped);
        assert!(StepStatus::Skipped < StepStatus::Failed);
    }

    #[test]
    fn severity_matches_table_position() {
        for (index, status) in SEVERITY.iter().enumerate() {
            assert_eq!(status.severity(), index);
        }
    }

    #[test]
    fn worst_status_picks_failed() {
        let worst = worst_status([StepStatus::Passed, StepStatus::Failed, StepStatus::Pending]);
        assert_eq!(worst, Some(StepStatus::Failed));
    }

    #[test]
    fn skipped_is_worse_than_undefined() {
        let worst = worst_status([StepStatus::Undefined, StepStatus::Skipped]);
        assert_eq!(worst, Some(StepStatus::Skipped));
    }

    #[test]
    fn worst_status_of_nothing_is_none() {
        assert_eq!(worst_status(std::iter::empty()), None);
    }

    #[test]
    fn worst_status_of_single_is_itself() {
        assert_eq!(worst_status([StepStatus::Pending]), Some(StepStatus::Pending));
    }

    #[test]
    fn parses_status_names() {
        assert_eq!("passed".parse::<StepStatus>().unwrap(), StepStatus::Passed);
        assert_eq!("FAILED".parse::<StepStatus>().unwrap(), StepStatus::Failed);
        assert_eq!(" skipped ".parse::<StepStatus>().unwrap(), StepStatus::Skipped);
        assert!("green".parse::<StepStatus>().is_err());
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(format!("{}", StepStatus::Undefined), "undefined");
        assert_eq!(format!("{}", StepStatus::Pending), "pending");
    }

    #[test]
    fn serializes_lowercase() {
        let s = serde_json::to_string(&StepStatus::Skipped).unwrap();
        assert_eq!(s, "\"skipped\"");
    }
}
