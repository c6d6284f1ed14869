//! Ordered steps of one scenario or background.

use std::ptr;

use tracing::debug;

use crate::ast::Table;
use crate::config::RunConfig;
use crate::i18n::{Dialect, Keywords, ENGLISH};
use crate::steps::binding::Runtime;
use crate::steps::failure::StepFailure;
use crate::steps::invocation::{CollectionState, StepInvocation};
use crate::steps::status::{worst_status, StepStatus};
use crate::steps::visitor::StepVisitor;

/// The steps of a scenario, outline row or background, in order.
///
/// The collection owns the examples table whose cells its steps report
/// into, and tracks the run-level failure: once any step has captured a
/// failure (even one hidden from reports), the remaining steps are looked
/// up but not invoked.
///
/// # Example
///
/// ```
/// use cukerun::config::RunConfig;
/// use cukerun::steps::{
///     Runtime, StepCollection, StepFailure, StepInvocation, StepMatch, StepSource, StepStatus,
/// };
///
/// struct NothingDefined;
///
/// impl Runtime for NothingDefined {
///     fn step_match(&mut self, name: &str) -> Result<StepMatch, StepFailure> {
///         Err(StepFailure::undefined(name))
///     }
///     fn step_visited(&mut self, _: &StepInvocation) {}
/// }
///
/// let mut steps = StepCollection::new(vec![
///     StepInvocation::new(StepSource::new("Given ", "a cucumber")),
///     StepInvocation::new(StepSource::new("And ", "another one")),
/// ]);
/// steps.invoke_all(&mut NothingDefined, &RunConfig::default());
///
/// assert_eq!(steps.status(), Some(StepStatus::Undefined));
/// assert_eq!(steps.actual_keyword(1).as_deref(), Some("Given "));
/// ```
#[derive(Debug)]
pub struct StepCollection {
    steps: Vec<StepInvocation>,
    examples: Option<Table>,
    dialect: &'static Dialect,
    inherited_failure: Option<StepFailure>,
}

impl StepCollection {
    /// Create an English collection.
    pub fn new(steps: Vec<StepInvocation>) -> Self {
        Self {
            steps,
            examples: None,
            dialect: &ENGLISH,
            inherited_failure: None,
        }
    }

    /// Use another keyword dialect.
    pub fn with_dialect(mut self, dialect: &'static Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Attach the examples table that matched cells index into.
    ///
    /// Every matched cell starts out mirroring its step's current status.
    pub fn with_examples(mut self, mut table: Table) -> Self {
        for step in &mut self.steps {
            let status = step.status();
            step.set_status(status, Some(&mut table));
        }
        self.examples = Some(table);
        self
    }

    /// Mark every step as a background step.
    pub fn into_background(mut self) -> Self {
        for step in &mut self.steps {
            step.set_background(true);
        }
        self
    }

    /// Carry a failure over from a previous collection (e.g. a failed
    /// background), so none of these steps run.
    pub fn inherit_failure(&mut self, failure: StepFailure) {
        self.inherited_failure = Some(failure);
    }

    pub fn steps(&self) -> &[StepInvocation] {
        &self.steps
    }

    pub fn examples(&self) -> Option<&Table> {
        self.examples.as_ref()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The run-level failure: an inherited one, else the first failure
    /// captured by any step.
    pub fn exception(&self) -> Option<&StepFailure> {
        self.inherited_failure
            .as_ref()
            .or_else(|| self.steps.iter().find_map(StepInvocation::exception))
    }

    /// Position of a step owned by this collection.
    pub fn position(&self, step: &StepInvocation) -> Option<usize> {
        self.steps.iter().position(|s| ptr::eq(s, step))
    }

    /// The step before `step`, if it belongs here and is not first.
    pub fn previous_step(&self, step: &StepInvocation) -> Option<&StepInvocation> {
        let index = self.position(step)?;
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Effective keyword of the step at `index`.
    pub fn actual_keyword(&self, index: usize) -> Option<String> {
        let block: Vec<&str> = self.steps.iter().map(StepInvocation::keyword).collect();
        Keywords::new(self.dialect).actual_keyword(&block, index)
    }

    /// Padding after the step at `index` so trailing comments line up.
    pub fn source_indent(&self, index: usize) -> usize {
        let widest = self
            .steps
            .iter()
            .map(StepInvocation::text_length)
            .max()
            .unwrap_or(0);
        self.steps
            .get(index)
            .map_or(0, |step| widest - step.text_length())
    }

    /// Worst status over all steps; `None` when there are no steps.
    pub fn status(&self) -> Option<StepStatus> {
        worst_status(self.steps.iter().map(StepInvocation::status))
    }

    /// Set a step's status, mirroring it into the examples table.
    pub fn set_step_status(&mut self, index: usize, status: StepStatus) {
        if let Some(step) = self.steps.get_mut(index) {
            step.set_status(status, self.examples.as_mut());
        }
    }

    /// Invoke the step at `index` and return its status.
    pub fn invoke_step(
        &mut self,
        index: usize,
        runtime: &mut dyn Runtime,
        config: &RunConfig,
    ) -> Option<StepStatus> {
        if index >= self.steps.len() {
            return None;
        }

        let (before, rest) = self.steps.split_at_mut(index);
        let step = &mut rest[0];
        let failure = self
            .inherited_failure
            .as_ref()
            .or_else(|| before.iter().find_map(StepInvocation::exception));
        let mut state = CollectionState {
            examples: self.examples.as_mut(),
            failure,
        };

        step.invoke(runtime, config, &mut state);
        Some(step.status())
    }

    /// Invoke every step in order.
    pub fn invoke_all(&mut self, runtime: &mut dyn Runtime, config: &RunConfig) {
        for index in 0..self.steps.len() {
            self.invoke_step(index, runtime, config);
        }
    }

    /// Invoke every step, handing each result to the visitor.
    pub fn accept(
        &mut self,
        visitor: &mut dyn StepVisitor,
        runtime: &mut dyn Runtime,
        config: &RunConfig,
    ) {
        for index in 0..self.steps.len() {
            visitor.visit_step(&self.steps[index]);
            self.invoke_step(index, runtime, config);

            let keyword = self
                .actual_keyword(index)
                .unwrap_or_else(|| self.steps[index].keyword().to_string());
            let indent = self.source_indent(index);
            visitor.visit_step_result(self.steps[index].report(keyword, indent));
        }
        debug!(
            "Visited {} steps, overall status {:?}",
            self.steps.len(),
            self.status()
        );
    }
}
