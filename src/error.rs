//! Error types for vsfind operations.
//!
//! This module defines [`VsFindError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant except [`VsFindError::Other`] and [`VsFindError::Io`] is
//!   fatal for a discovery run; nothing in the pipeline retries.
//! - [`VsFindError::InternalConsistency`] marks a broken contract (a closed
//!   set received a value outside it) rather than a user mistake.
//! - Use `anyhow::Error` (via `VsFindError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vsfind operations.
#[derive(Debug, Error)]
pub enum VsFindError {
    /// The installer-query tool exited non-zero or could not be started.
    #[error("Running {command} failed with exit code {code:?}:\n{output}")]
    QueryToolFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The installer-query tool produced a record without a required field.
    #[error("Malformed installer query output: {message}")]
    MalformedQueryOutput { message: String },

    /// A closed set of values received a member outside the set.
    #[error("Internal consistency violation: {message}")]
    InternalConsistency { message: String },

    /// Discovery finished without a single usable toolset.
    #[error(
        "Could not locate a complete toolset.\nThe following paths were examined:{}",
        indented_paths(.examined)
    )]
    NoToolsetFound { examined: Vec<PathBuf> },

    /// Neither `ProgramFiles(x86)` nor `ProgramFiles` is set and no override was given.
    #[error("Unable to determine the 32-bit Program Files directory")]
    ProgramFilesUnavailable,

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vsfind operations.
pub type Result<T> = std::result::Result<T, VsFindError>;

fn indented_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("\n    {}", p.display()))
        .collect()
}
