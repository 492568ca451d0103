//! Error types for groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GroundworkError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors
//! - Only `InvalidProjectName` and `UnsafeDirectory` may abort before any file
//!   is written; everything after scaffolding funnels into the rollback path

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// The requested project name violates package naming rules.
    #[error("Cannot create a project named \"{name}\": {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The target directory contains files that could conflict.
    #[error("The directory {path} contains files that could conflict")]
    UnsafeDirectory { path: PathBuf },

    /// A package specifier could not be resolved to a name/version.
    #[error("Failed to resolve package \"{specifier}\": {message}")]
    Resolution { specifier: String, message: String },

    /// The package manager child process exited non-zero.
    #[error("`{command}` has failed")]
    InstallerFailed { command: String, code: Option<i32> },

    /// The template init script exited non-zero.
    #[error("Template initialization failed with exit code {code:?}")]
    InitFailed { code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GroundworkError {
    /// Whether this error was raised before anything was written to disk.
    ///
    /// Pre-scaffold errors report and exit; everything else triggers rollback.
    pub fn is_pre_scaffold(&self) -> bool {
        matches!(
            self,
            Self::InvalidProjectName { .. } | Self::UnsafeDirectory { .. }
        )
    }
}

/// Result type alias for groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
