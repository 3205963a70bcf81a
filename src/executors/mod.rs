//! Language executors and the probe contract.
//!
//! # Modules
//!
//! - [`probe`] - Probe trait, outcome structure, ids and hints
//! - [`catalog`] - Static id → unit mapping
//! - [`command`] - Generic binary lookup + version query probe
//! - [`builtin`] - Built-in executor table and custom executor registration

pub mod builtin;
pub mod catalog;
pub mod command;
pub mod probe;

pub use builtin::{builtin_catalog, builtin_ids, register_custom, BUILTIN_EXECUTORS};
pub use catalog::{ExecutorCatalog, ExecutorUnit};
pub use command::{extract_version, CommandProbe};
pub use probe::{ExecutorId, OverrideHints, Probe, ProbeOutcome, RuntimeFragment};
