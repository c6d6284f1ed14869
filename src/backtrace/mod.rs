//! Failure trace sanitation.
//!
//! - [`BacktraceFilter`] - Rewrites and strips captured trace frames
//! - [`BacktraceOptions`] - Full/truncate switches passed to the filter
//! - [`BUILTIN_PATTERNS`] - Frames considered internal to the runner

pub mod filter;

pub use filter::{
    BacktraceFilter, BacktraceOptions, FramePattern, BUILTIN_PATTERNS, NATIVE_BRIDGE_PATTERNS,
};
