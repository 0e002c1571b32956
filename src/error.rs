//! Error types for depstrap operations.
//!
//! This module defines [`DepstrapError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepstrapError` for failures the caller maps to an exit status
//! - Use `anyhow::Error` (via `DepstrapError::Other`) for unexpected errors
//! - Package manager failures keep the package manager's own exit code

use thiserror::Error;

use crate::platform::OsIdentifier;

/// Core error type for depstrap operations.
#[derive(Debug, Error)]
pub enum DepstrapError {
    /// The OS identifier is not one of the recognized build agents.
    #[error(
        "Unknown OS identifier: '{token}' (expected one of: {expected})",
        expected = OsIdentifier::names().join(", ")
    )]
    UnrecognizedOs { token: String },

    /// The package manager ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    PackageManagerFailed { command: String, code: Option<i32> },

    /// The package manager could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DepstrapError {
    /// Process exit status for this error.
    ///
    /// A failing package manager's status is passed through unchanged so the
    /// CI job sees the same code it would have seen from a shell script.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PackageManagerFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for depstrap operations.
pub type Result<T> = std::result::Result<T, DepstrapError>;
