//! Step invocation: lookup, execution and outcome classification.
//!
//! A [`StepInvocation`] is one concrete occurrence of a step in a scenario
//! or background. It binds its text through the [`Runtime`], runs the bound
//! definition at most once, and records what happened. Failures never escape
//! `invoke`; callers read [`StepInvocation::status`] and
//! [`StepInvocation::reported_exception`] instead.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::ast::{CellRef, MultilineArg, Table};
use crate::config::RunConfig;
use crate::steps::binding::{Runtime, StepMatch};
use crate::steps::failure::{FailureKind, StepFailure};
use crate::steps::status::StepStatus;
use crate::steps::visitor::StepReport;

/// Where a step is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Feature file path.
    pub file: String,
    /// One-based line number.
    pub line: usize,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The step as written in the feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSource {
    /// Literal keyword, including its trailing space (`"Given "`).
    pub keyword: String,
    /// Literal step text, before any outline substitution.
    pub name: String,
    /// Source position, when known.
    pub location: Option<SourceLocation>,
}

impl StepSource {
    /// Create a step source without a location.
    pub fn new(keyword: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            location: None,
        }
    }

    /// Attach a source position.
    pub fn at(mut self, file: impl Into<String>, line: usize) -> Self {
        self.location = Some(SourceLocation::new(file, line));
        self
    }

    /// Trace entry pointing at this step, e.g.
    /// ``features/cukes.feature:3:in `Given I have 3 cukes'``.
    pub fn backtrace_line(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(|loc| format!("{}:in `{}{}'", loc, self.keyword, self.name))
    }
}

/// Borrowed view of the collection that owns an invocation.
///
/// The collection owns the examples table whose cells mirror step statuses,
/// and may already hold a failure that stops further steps from running.
#[derive(Debug, Default)]
pub struct CollectionState<'a> {
    /// Table owning the cells listed in each invocation's matched cells.
    pub examples: Option<&'a mut Table>,
    /// Failure already recorded for the run; later steps skip invocation.
    pub failure: Option<&'a StepFailure>,
}

impl<'a> CollectionState<'a> {
    /// State for an invocation that belongs to no collection.
    pub fn detached() -> Self {
        Self::default()
    }
}

/// One step occurrence and its outcome.
#[derive(Debug)]
pub struct StepInvocation {
    source: StepSource,
    name: String,
    multiline_arg: Option<MultilineArg>,
    matched_cells: Vec<CellRef>,
    status: StepStatus,
    step_match: Option<StepMatch>,
    exception: Option<StepFailure>,
    reported: bool,
    table_diff: Option<MultilineArg>,
    invoked: bool,
    background: bool,
}

impl StepInvocation {
    /// Create an invocation whose display name is the literal step text.
    pub fn new(source: StepSource) -> Self {
        let name = source.name.clone();
        Self {
            source,
            name,
            multiline_arg: None,
            matched_cells: Vec::new(),
            status: StepStatus::Skipped,
            step_match: None,
            exception: None,
            reported: false,
            table_diff: None,
            invoked: false,
            background: false,
        }
    }

    /// Replace the display name (e.g. after outline substitution).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a table or doc string.
    pub fn with_multiline_arg(mut self, arg: impl Into<MultilineArg>) -> Self {
        self.multiline_arg = Some(arg.into());
        self
    }

    /// Bind examples-table cells that mirror this step's status.
    pub fn with_matched_cells(mut self, cells: Vec<CellRef>) -> Self {
        self.matched_cells = cells;
        self
    }

    pub fn source(&self) -> &StepSource {
        &self.source
    }

    /// Resolved step text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal keyword as written.
    pub fn keyword(&self) -> &str {
        &self.source.keyword
    }

    /// The argument attached in the feature file.
    pub fn multiline_arg(&self) -> Option<&MultilineArg> {
        self.multiline_arg.as_ref()
    }

    /// The argument to report: the comparison table of a failed table
    /// match, otherwise the attached argument.
    pub fn effective_multiline_arg(&self) -> Option<&MultilineArg> {
        self.table_diff.as_ref().or(self.multiline_arg.as_ref())
    }

    pub fn matched_cells(&self) -> &[CellRef] {
        &self.matched_cells
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    /// The binding, once lookup has run.
    pub fn step_match(&self) -> Option<&StepMatch> {
        self.step_match.as_ref()
    }

    /// Failure captured during lookup or invocation.
    pub fn exception(&self) -> Option<&StepFailure> {
        self.exception.as_ref()
    }

    /// Failure to show in reports.
    ///
    /// Non-strict runs hide undefined-step failures raised by the step
    /// itself; the status still records them.
    pub fn reported_exception(&self) -> Option<&StepFailure> {
        self.exception.as_ref().filter(|_| self.reported)
    }

    pub fn is_background(&self) -> bool {
        self.background
    }

    pub fn set_background(&mut self, background: bool) {
        self.background = background;
    }

    /// Prevent the bound definition from running. Lookup still happens.
    pub fn skip_invoke(&mut self) {
        self.invoked = true;
    }

    /// `file:line` of the step, when known.
    pub fn file_colon_line(&self) -> Option<String> {
        self.source.location.as_ref().map(ToString::to_string)
    }

    /// Trace entry appended to every recorded failure.
    pub fn backtrace_line(&self) -> Option<String> {
        self.source.backtrace_line()
    }

    /// Display width of keyword and resolved text.
    pub fn text_length(&self) -> usize {
        self.source.keyword.chars().count() + self.name.chars().count()
    }

    /// Set the status and mirror it to every matched cell.
    pub fn set_status(&mut self, status: StepStatus, examples: Option<&mut Table>) {
        self.status = status;
        if let Some(table) = examples {
            for cell in &self.matched_cells {
                if !table.set_status(*cell, status) {
                    debug!("Step '{}' is bound to missing cell {:?}", self.name, cell);
                }
            }
        }
    }

    /// Bind the step text through the runtime, once.
    ///
    /// Undefined and ambiguous lookups are recorded as failures and leave an
    /// unresolved match behind so the lookup is not repeated.
    pub fn find_step_match(
        &mut self,
        runtime: &mut dyn Runtime,
        config: &RunConfig,
        state: &mut CollectionState<'_>,
    ) {
        if self.step_match.is_some() {
            return;
        }

        match runtime.step_match(&self.name) {
            Ok(step_match) => {
                debug!("Step '{}' matched", self.name);
                self.step_match = Some(step_match);
            }
            Err(failure) if failure.is_undefined() => {
                debug!("Step '{}' is undefined", self.name);
                self.record_failure(config, failure, true);
                self.set_status(StepStatus::Undefined, state.examples.as_deref_mut());
                self.step_match = Some(StepMatch::unresolved(&self.name));
            }
            Err(failure) => {
                debug!("Step '{}' lookup failed: {}", self.name, failure.kind());
                self.record_failure(config, failure, false);
                self.set_status(StepStatus::Failed, state.examples.as_deref_mut());
                self.step_match = Some(StepMatch::unresolved(&self.name));
            }
        }

        runtime.step_visited(self);
    }

    /// Look up and run the step.
    ///
    /// The definition runs at most once, and not at all on a dry run, after a
    /// failed lookup, or once the owning collection holds a failure. Skipped
    /// steps keep the `Skipped` status.
    pub fn invoke(
        &mut self,
        runtime: &mut dyn Runtime,
        config: &RunConfig,
        state: &mut CollectionState<'_>,
    ) {
        self.find_step_match(runtime, config, state);

        if let Some(reason) = self.skip_reason(config, state) {
            debug!("Not invoking step '{}': {}", self.name, reason);
            return;
        }
        self.invoked = true;

        let Some(step_match) = self.step_match.as_ref() else {
            return;
        };
        let arg = self.multiline_arg.as_ref();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| step_match.invoke(arg)));

        let failure = match outcome {
            Ok(Ok(())) => {
                runtime.after_step();
                self.set_status(StepStatus::Passed, state.examples.as_deref_mut());
                return;
            }
            Ok(Err(err)) => StepFailure::from_error(err),
            Err(payload) => StepFailure::from_panic(payload),
        };

        let status = match failure.kind() {
            FailureKind::Pending => StepStatus::Pending,
            FailureKind::Undefined => StepStatus::Undefined,
            FailureKind::TableMismatch(diff) => {
                self.table_diff = Some(MultilineArg::Table(diff.clone()));
                StepStatus::Failed
            }
            FailureKind::Ambiguous | FailureKind::Generic => StepStatus::Failed,
        };
        debug!("Step '{}' finished as {}", self.name, status);
        self.record_failure(config, failure, true);
        self.set_status(status, state.examples.as_deref_mut());
    }

    fn skip_reason(
        &self,
        config: &RunConfig,
        state: &CollectionState<'_>,
    ) -> Option<&'static str> {
        if self.invoked {
            Some("already invoked")
        } else if config.dry_run {
            Some("dry run")
        } else if self.exception.is_some() {
            Some("lookup failed")
        } else if state.failure.is_some() {
            Some("an earlier step failed")
        } else {
            None
        }
    }

    /// Record a failure.
    ///
    /// With `clear_backtrace` (every path except an ambiguous lookup) the
    /// trace is rebuilt from this step's location and filtered. Otherwise the
    /// failure's own frames are kept verbatim, followed by the location.
    fn record_failure(
        &mut self,
        config: &RunConfig,
        mut failure: StepFailure,
        clear_backtrace: bool,
    ) {
        let location = self.backtrace_line();
        let frames = failure.backtrace_mut();
        if clear_backtrace || frames.is_none() {
            *frames = Some(Vec::new());
        }
        if let (Some(frames), Some(line)) = (frames.as_mut(), location) {
            frames.push(line);
        }

        if clear_backtrace {
            config.backtrace_filter().filter_failure(&mut failure);
        }

        self.reported = config.strict || !failure.is_undefined() || failure.is_nested();
        self.exception = Some(failure);
    }

    /// Everything a renderer needs for this step.
    pub fn report(&self, keyword: String, source_indent: usize) -> StepReport<'_> {
        StepReport {
            keyword,
            name: &self.name,
            step_match: self.step_match.as_ref(),
            multiline_arg: self.effective_multiline_arg(),
            status: self.status,
            exception: self.reported_exception(),
            source_indent,
            background: self.background,
            file_colon_line: self.file_colon_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DocString;
    use crate::config::BacktraceSettings;
    use crate::steps::binding::StepDefinition;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::Arc;

    /// Runtime backed by a map of canned lookup results.
    #[derive(Default)]
    struct FakeRuntime {
        matches: HashMap<String, Result<StepMatch, StepFailure>>,
        visited: Vec<String>,
        after_steps: usize,
    }

    impl FakeRuntime {
        fn define(mut self, name: &str, definition: impl StepDefinition + 'static) -> Self {
            self.matches
                .insert(name.to_string(), Ok(StepMatch::resolved(Arc::new(definition), name)));
            self
        }

        fn fail_lookup(mut self, name: &str, failure: StepFailure) -> Self {
            self.matches.insert(name.to_string(), Err(failure));
            self
        }
    }

    impl Runtime for FakeRuntime {
        fn step_match(&mut self, name: &str) -> Result<StepMatch, StepFailure> {
            self.matches
                .get(name)
                .cloned()
                .unwrap_or_else(|| Err(StepFailure::undefined(name)))
        }

        fn step_visited(&mut self, step: &StepInvocation) {
            self.visited.push(step.name().to_string());
        }

        fn after_step(&mut self) {
            self.after_steps += 1;
        }
    }

    fn step(name: &str) -> StepInvocation {
        StepInvocation::new(StepSource::new("Given ", name).at("features/cukes.feature", 3))
    }

    fn counting(counter: &Rc<Cell<usize>>) -> impl StepDefinition + 'static {
        let counter = Rc::clone(counter);
        move |_: Option<&MultilineArg>| -> anyhow::Result<()> {
            counter.set(counter.get() + 1);
            Ok(())
        }
    }

    fn failing_with(failure: StepFailure) -> impl StepDefinition + 'static {
        move |_: Option<&MultilineArg>| -> anyhow::Result<()> { Err(failure.clone().into()) }
    }

    fn strict() -> RunConfig {
        RunConfig {
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn new_invocation_is_skipped() {
        let step = step("I have 3 cukes");
        assert_eq!(step.status(), StepStatus::Skipped);
        assert!(step.step_match().is_none());
        assert!(step.exception().is_none());
    }

    #[test]
    fn passing_step_passes_and_runs_after_step_hook() {
        let calls = Rc::new(Cell::new(0));
        let mut runtime = FakeRuntime::default().define("I have 3 cukes", counting(&calls));
        let mut step = step("I have 3 cukes");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Passed);
        assert_eq!(calls.get(), 1);
        assert_eq!(runtime.after_steps, 1);
        assert_eq!(runtime.visited, vec!["I have 3 cukes"]);
        assert!(step.exception().is_none());
    }

    #[test]
    fn second_invoke_is_a_noop() {
        let calls = Rc::new(Cell::new(0));
        let mut runtime = FakeRuntime::default().define("I wait", counting(&calls));
        let mut step = step("I wait");
        let config = RunConfig::default();

        step.invoke(&mut runtime, &config, &mut CollectionState::detached());
        step.invoke(&mut runtime, &config, &mut CollectionState::detached());

        assert_eq!(calls.get(), 1);
        assert_eq!(step.status(), StepStatus::Passed);
        assert_eq!(runtime.visited.len(), 1);
    }

    #[test]
    fn dry_run_skips_definition() {
        let calls = Rc::new(Cell::new(0));
        let mut runtime = FakeRuntime::default().define("I wait", counting(&calls));
        let mut step = step("I wait");
        let config = RunConfig {
            dry_run: true,
            ..Default::default()
        };

        step.invoke(&mut runtime, &config, &mut CollectionState::detached());

        assert_eq!(calls.get(), 0);
        assert_eq!(step.status(), StepStatus::Skipped);
        assert!(step.step_match().unwrap().is_resolved());
    }

    #[test]
    fn collection_failure_skips_definition() {
        let calls = Rc::new(Cell::new(0));
        let mut runtime = FakeRuntime::default().define("I wait", counting(&calls));
        let mut step = step("I wait");
        let earlier = StepFailure::generic("earlier step blew up");
        let mut state = CollectionState {
            examples: None,
            failure: Some(&earlier),
        };

        step.invoke(&mut runtime, &RunConfig::default(), &mut state);

        assert_eq!(calls.get(), 0);
        assert_eq!(step.status(), StepStatus::Skipped);
        assert_eq!(runtime.visited, vec!["I wait"]);
    }

    #[test]
    fn skip_invoke_still_looks_up() {
        let calls = Rc::new(Cell::new(0));
        let mut runtime = FakeRuntime::default().define("I wait", counting(&calls));
        let mut step = step("I wait");
        step.skip_invoke();

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(calls.get(), 0);
        assert!(step.step_match().is_some());
        assert_eq!(step.status(), StepStatus::Skipped);
    }

    #[test]
    fn undefined_lookup_is_hidden_when_not_strict() {
        let mut runtime = FakeRuntime::default();
        let mut step = step("I am not defined");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Undefined);
        assert!(step.exception().is_some());
        assert!(step.reported_exception().is_none());
        assert!(!step.step_match().unwrap().is_resolved());
        assert_eq!(runtime.visited, vec!["I am not defined"]);
    }

    #[test]
    fn undefined_lookup_is_reported_when_strict() {
        let mut runtime = FakeRuntime::default();
        let mut step = step("I am not defined");

        step.invoke(&mut runtime, &strict(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Undefined);
        assert_eq!(step.reported_exception(), step.exception());
        assert!(step.reported_exception().is_some());
    }

    #[test]
    fn undefined_lookup_rebuilds_trace() {
        let failure = StepFailure::undefined("x")
            .with_backtrace(vec!["/gems/matcher.rb:9: in `match`".into()]);
        let mut runtime = FakeRuntime::default().fail_lookup("x", failure);
        let mut step = step("x");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(
            step.exception().unwrap().backtrace().unwrap(),
            ["features/cukes.feature:3:in `Given x'".to_string()]
        );
    }

    #[test]
    fn nested_undefined_is_reported_without_strict() {
        let mut runtime = FakeRuntime::default().define(
            "I call a missing sub-step",
            failing_with(StepFailure::undefined("missing").into_nested()),
        );
        let mut step = step("I call a missing sub-step");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Undefined);
        assert!(step.reported_exception().is_some());
    }

    #[test]
    fn ambiguous_lookup_fails_and_keeps_trace() {
        let frames = vec![
            "/gems/cucumber/lib/cucumber/step_mother.rb:10: in `step_match`".to_string(),
            "features/step_definitions/cukes.rs:3".to_string(),
        ];
        let failure = StepFailure::ambiguous("I have 3 cukes", &[]).with_backtrace(frames.clone());
        let mut runtime = FakeRuntime::default().fail_lookup("I have 3 cukes", failure);
        let mut step = step("I have 3 cukes");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Failed);
        assert!(step.reported_exception().is_some());
        let trace = step.exception().unwrap().backtrace().unwrap();
        assert_eq!(&trace[..2], frames.as_slice());
        assert_eq!(trace[2], "features/cukes.feature:3:in `Given I have 3 cukes'");
    }

    #[test]
    fn pending_definition() {
        let mut runtime = FakeRuntime::default()
            .define("I am lazy", failing_with(StepFailure::pending("TODO")));
        let mut step = step("I am lazy");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Pending);
        assert_eq!(step.reported_exception().unwrap().message(), "TODO");
        assert_eq!(runtime.after_steps, 0);
    }

    #[test]
    fn undefined_raised_by_definition() {
        let mut runtime = FakeRuntime::default()
            .define("I give up", failing_with(StepFailure::undefined("I give up")));
        let mut step = step("I give up");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Undefined);
        assert!(step.exception().is_some());
        assert!(step.reported_exception().is_none());
    }

    #[test]
    fn generic_error_fails_step() {
        let mut runtime = FakeRuntime::default().define(
            "I explode",
            |_: Option<&MultilineArg>| -> anyhow::Result<()> { anyhow::bail!("kaboom") },
        );
        let mut step = step("I explode");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Failed);
        let failure = step.reported_exception().unwrap();
        assert_eq!(failure.kind(), &FailureKind::Generic);
        assert_eq!(failure.message(), "kaboom");
    }

    #[test]
    fn panicking_definition_fails_step() {
        let mut runtime = FakeRuntime::default().define(
            "I assert",
            |_: Option<&MultilineArg>| -> anyhow::Result<()> {
                assert_eq!(1 + 1, 3, "math is broken");
                Ok(())
            },
        );
        let mut step = step("I assert");

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Failed);
        assert!(step.exception().unwrap().message().contains("math is broken"));
    }

    #[test]
    fn table_mismatch_reports_diff_table() {
        let attached = Table::from_rows(vec![vec!["a"], vec!["1"]]);
        let diff = Table::from_rows(vec![vec!["a"], vec!["1"], vec!["2"]]);
        let mut runtime = FakeRuntime::default().define(
            "the table is",
            failing_with(StepFailure::table_mismatch(diff.clone(), "Tables were not identical")),
        );
        let mut step = step("the table is").with_multiline_arg(attached.clone());

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Failed);
        assert_eq!(step.effective_multiline_arg(), Some(&MultilineArg::Table(diff)));
        assert_eq!(step.multiline_arg(), Some(&MultilineArg::Table(attached)));
    }

    #[test]
    fn definition_receives_multiline_arg() {
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);
        let mut runtime = FakeRuntime::default().define(
            "the text is",
            move |arg: Option<&MultilineArg>| -> anyhow::Result<()> {
                flag.set(arg.and_then(MultilineArg::as_doc_string).is_some());
                Ok(())
            },
        );
        let mut step = step("the text is").with_multiline_arg(DocString::new("hello"));

        step.invoke(&mut runtime, &RunConfig::default(), &mut CollectionState::detached());

        assert!(seen.get());
    }

    #[test]
    fn failure_trace_is_filtered() {
        let mut runtime = FakeRuntime::default()
            .define("I explode", failing_with(StepFailure::generic("kaboom")));
        let mut step = StepInvocation::new(
            StepSource::new("When ", "I explode").at("/work/features/cukes.feature", 7),
        );
        let config = RunConfig {
            backtrace: BacktraceSettings {
                cwd: Some("/work".into()),
                truncate: true,
                ..Default::default()
            },
            ..Default::default()
        };

        step.invoke(&mut runtime, &config, &mut CollectionState::detached());

        assert_eq!(
            step.exception().unwrap().backtrace().unwrap(),
            ["./features/cukes.feature:7".to_string()]
        );
    }

    #[test]
    fn definition_failure_drops_carried_frames() {
        let failure = StepFailure::generic("kaboom")
            .with_backtrace(vec!["/work/lib/app.rb:3:in `helper'".into()]);
        let mut runtime = FakeRuntime::default().define("I explode", failing_with(failure));
        let mut step = StepInvocation::new(
            StepSource::new("When ", "I explode").at("/work/features/cukes.feature", 7),
        );
        let config = RunConfig {
            backtrace: BacktraceSettings {
                cwd: Some("/work".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        step.invoke(&mut runtime, &config, &mut CollectionState::detached());

        assert_eq!(step.status(), StepStatus::Failed);
        assert_eq!(
            step.exception().unwrap().backtrace().unwrap(),
            ["./features/cukes.feature:7:in `When I explode'".to_string()]
        );
    }

    #[test]
    fn status_fans_out_to_matched_cells() {
        let mut table = Table::from_rows(vec![vec!["n", "m"], vec!["1", "2"]]);
        let cells = vec![CellRef::new(1, 0), CellRef::new(1, 1)];
        let mut step = step("I have 1 cuke").with_matched_cells(cells.clone());

        step.set_status(StepStatus::Pending, Some(&mut table));

        for cell in cells {
            assert_eq!(table.cell(cell).unwrap().status, Some(StepStatus::Pending));
        }
        assert_eq!(table.cell(CellRef::new(0, 0)).unwrap().status, None);
    }

    #[test]
    fn invoke_updates_matched_cells() {
        let mut table = Table::from_rows(vec![vec!["n"], vec!["3"]]);
        let mut runtime = FakeRuntime::default();
        let mut step = step("I have 3 cukes").with_matched_cells(vec![CellRef::new(1, 0)]);
        let mut state = CollectionState {
            examples: Some(&mut table),
            failure: None,
        };

        step.invoke(&mut runtime, &RunConfig::default(), &mut state);

        assert_eq!(
            table.cell(CellRef::new(1, 0)).unwrap().status,
            Some(StepStatus::Undefined)
        );
    }

    #[test]
    fn backtrace_line_needs_location() {
        let located = step("I have 3 cukes");
        assert_eq!(
            located.backtrace_line().as_deref(),
            Some("features/cukes.feature:3:in `Given I have 3 cukes'")
        );
        assert_eq!(located.file_colon_line().as_deref(), Some("features/cukes.feature:3"));

        let unlocated = StepInvocation::new(StepSource::new("Given ", "x"));
        assert!(unlocated.backtrace_line().is_none());
    }

    #[test]
    fn report_carries_outcome() {
        let mut runtime = FakeRuntime::default();
        let mut step = step("I am not defined");
        step.set_background(true);

        step.invoke(&mut runtime, &strict(), &mut CollectionState::detached());
        let report = step.report("Given ".to_string(), 4);

        assert_eq!(report.keyword, "Given ");
        assert_eq!(report.name, "I am not defined");
        assert_eq!(report.status, StepStatus::Undefined);
        assert!(report.exception.is_some());
        assert_eq!(report.source_indent, 4);
        assert!(report.background);
        assert_eq!(report.file_colon_line.as_deref(), Some("features/cukes.feature:3"));
    }
}
