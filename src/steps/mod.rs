//! Step invocation and outcome classification.
//!
//! This module provides the execution core of the runner:
//!
//! - [`StepInvocation`] - One step occurrence: lookup, invoke, classify
//! - [`StepCollection`] - Ordered steps of a scenario or background
//! - [`StepStatus`] / [`worst_status`] - Outcome kinds and severity aggregation
//! - [`StepFailure`] - Failure taxonomy recorded on invocations
//! - [`StepMatch`] / [`Runtime`] - Bindings and the lookup service
//! - [`StepVisitor`] / [`StepReport`] - Hand-off to report renderers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cukerun::ast::MultilineArg;
//! use cukerun::config::RunConfig;
//! use cukerun::steps::{
//!     CollectionState, Runtime, StepFailure, StepInvocation, StepMatch, StepSource, StepStatus,
//! };
//!
//! struct Pending;
//!
//! impl Runtime for Pending {
//!     fn step_match(&mut self, name: &str) -> Result<StepMatch, StepFailure> {
//!         let definition = |_: Option<&MultilineArg>| -> anyhow::Result<()> {
//!             Err(StepFailure::pending("TODO").into())
//!         };
//!         Ok(StepMatch::resolved(Arc::new(definition), name))
//!     }
//!     fn step_visited(&mut self, _: &StepInvocation) {}
//! }
//!
//! let mut step = StepInvocation::new(StepSource::new("Given ", "I have 3 cukes"));
//! step.invoke(&mut Pending, &RunConfig::default(), &mut CollectionState::detached());
//!
//! assert_eq!(step.status(), StepStatus::Pending);
//! ```

pub mod binding;
pub mod collection;
pub mod failure;
pub mod invocation;
pub mod status;
pub mod visitor;

pub use binding::{Runtime, StepDefinition, StepMatch};
pub use collection::StepCollection;
pub use failure::{FailureKind, StepFailure};
pub use invocation::{CollectionState, SourceLocation, StepInvocation, StepSource};
pub use status::{worst_status, StepStatus, SEVERITY};
pub use visitor::{StepReport, StepVisitor};
