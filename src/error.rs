//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the error type returned by the
//! fallible component calls, and a [`Result`] type alias for convenience.
//!
//! A failed run is a value ([`crate::runner::SetupFailure`]), not an error.
//! `SetupError` covers the component calls the orchestrator inspects and
//! turns into such a value.

use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A command could not be spawned or did not complete.
    #[error("`{command}` failed (exit code {code:?})")]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool was queried but could not be resolved on PATH.
    #[error("Tool not found on PATH: {tool}")]
    ToolNotFound { tool: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
