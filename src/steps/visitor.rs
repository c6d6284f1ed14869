//! Report hand-off.
//!
//! Renderers implement [`StepVisitor`]; the step collection calls it for
//! every step, before and after invocation.

use crate::ast::MultilineArg;
use crate::steps::binding::StepMatch;
use crate::steps::failure::StepFailure;
use crate::steps::invocation::StepInvocation;
use crate::steps::status::StepStatus;

/// Finalized outcome of one step, as a renderer sees it.
#[derive(Debug, Clone)]
pub struct StepReport<'a> {
    /// Effective keyword (repeat keywords resolved).
    pub keyword: String,
    /// Resolved step text.
    pub name: &'a str,
    /// Binding, once lookup ran.
    pub step_match: Option<&'a StepMatch>,
    /// Attached argument, or the diff table of a failed table comparison.
    pub multiline_arg: Option<&'a MultilineArg>,
    pub status: StepStatus,
    /// Failure to display; `None` for hidden undefined failures.
    pub exception: Option<&'a StepFailure>,
    /// Padding that aligns trailing comments within the block.
    pub source_indent: usize,
    pub background: bool,
    pub file_colon_line: Option<String>,
}

/// Receives step results.
pub trait StepVisitor {
    /// Called before the step is invoked.
    fn visit_step(&mut self, step: &StepInvocation) {
        let _ = step;
    }

    /// Called once the step's outcome is final.
    fn visit_step_result(&mut self, report: StepReport<'_>);
}
