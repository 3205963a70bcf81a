//! Capability probing and result aggregation.
//!
//! # Modules
//!
//! - [`registry`] - Ordered executors to probe, with hints
//! - [`status`] - Per-executor classification and records
//! - [`orchestrator`] - Sequential, fault-isolated probing
//! - [`aggregator`] - Runtime document and active executor set
//! - [`verdict`] - Run verdict and exit status

pub mod aggregator;
pub mod orchestrator;
pub mod registry;
pub mod status;
pub mod verdict;

pub use aggregator::{
    aggregate, ActiveExecutor, ActiveExecutors, Aggregate, KeyCollision, RuntimeConfig,
};
pub use orchestrator::{probe_all, ProbeEvent, ProbeRun};
pub use registry::{CapabilityRegistry, RegistryEntry};
pub use status::{CapabilityStatus, ProbeRecord};
pub use verdict::{combine, RunVerdict, EXIT_FAILURE, EXIT_SUCCESS};
