//! judgeconf - Detect language executors and verify them against a test suite.
//!
//! judgeconf probes every registered executor on the host, merges the
//! configuration fragments of the ones that could be configured into a single
//! runtime document, and runs a directory-based test suite against the active
//! executors. One verdict folds probe failures and test failures into the
//! process exit status.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, validation and hints
//! - [`error`] - Error types and result aliases
//! - [`executors`] - The probe contract, executor catalog and built-in probes
//! - [`host`] - Search path and problem directory introspection
//! - [`probing`] - Registry, orchestrator, aggregator and verdict
//! - [`report`] - Rendering of a run through the UI
//! - [`shell`] - Shell command execution
//! - [`testsuite`] - Test cases and the directory test runner
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use judgeconf::executors::{ExecutorCatalog, ExecutorUnit};
//! use judgeconf::probing::{aggregate, combine, probe_all, CapabilityRegistry, RegistryEntry};
//!
//! let mut catalog = ExecutorCatalog::new();
//! catalog.register("text", ExecutorUnit::Unsupported);
//!
//! let registry: CapabilityRegistry = vec![RegistryEntry::new("text")].into_iter().collect();
//! let run = probe_all(&registry, &catalog, |_| {});
//! let merged = aggregate(&run.records);
//!
//! assert!(merged.runtime.is_empty());
//! assert_eq!(combine(run.verdict.is_failed(), 0), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executors;
pub mod host;
pub mod probing;
pub mod report;
pub mod shell;
pub mod testsuite;
pub mod ui;

pub use error::{JudgeconfError, Result};
