//! Error types for judgeconf operations.
//!
//! This module defines [`JudgeconfError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `JudgeconfError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `JudgeconfError::Other`) for unexpected errors
//! - Errors raised by a single executor probe never escape the orchestrator;
//!   they are folded into a `ProbeCrashed` status instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for judgeconf operations.
#[derive(Debug, Error)]
pub enum JudgeconfError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Executor id named on the command line is not known to the catalog.
    #[error("Unknown executor: {name}")]
    UnknownExecutor { name: String },

    /// A probe could not complete (missing binary, unreadable output, ...).
    #[error("Probe for '{executor}' failed: {message}")]
    ProbeFailed { executor: String, message: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A test case definition is malformed.
    #[error("Invalid test case at {path}: {message}")]
    InvalidTestCase { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for judgeconf operations.
pub type Result<T> = std::result::Result<T, JudgeconfError>;
