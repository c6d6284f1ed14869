//! Error types for cukerun operations.
//!
//! This module defines [`CukeError`], the error type used for everything
//! outside step execution, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CukeError` for configuration, IO and CLI input problems
//! - Step outcomes are never `CukeError`s: a failing step records a
//!   [`StepFailure`](crate::steps::StepFailure) on its invocation instead
//! - Use `anyhow::Error` (via `CukeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cukerun operations.
#[derive(Debug, Error)]
pub enum CukeError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A backtrace filter pattern is not a valid regular expression.
    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// No keyword dialect is registered for the language code.
    #[error("Unknown language: {code}")]
    UnknownLanguage { code: String },

    /// A status name could not be parsed.
    #[error("Invalid step status: {value}")]
    InvalidStatus { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cukerun operations.
pub type Result<T> = std::result::Result<T, CukeError>;
