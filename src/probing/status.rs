//! Per-executor classification produced by the orchestrator.

use serde::Serialize;
use std::fmt;

use crate::executors::{ExecutorId, ProbeOutcome};

/// Classification of one registry entry after probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityStatus {
    /// The id has no executor in the catalog.
    NotExposed,
    /// The executor exists but declares no autodetection.
    NotSupported,
    /// The probe returned an error or panicked.
    ProbeCrashed { detail: String },
    /// The probe succeeded.
    Configured,
    /// The probe ran and reported failure.
    Failed,
}

impl CapabilityStatus {
    /// Whether this status marks the whole run as failed.
    ///
    /// `NotSupported` is deliberately not a failure.
    pub fn marks_failure(&self) -> bool {
        matches!(
            self,
            CapabilityStatus::NotExposed
                | CapabilityStatus::ProbeCrashed { .. }
                | CapabilityStatus::Failed
        )
    }

    /// Short uppercase label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            CapabilityStatus::NotExposed => "NOT_EXPOSED",
            CapabilityStatus::NotSupported => "NOT_SUPPORTED",
            CapabilityStatus::ProbeCrashed { .. } => "PROBE_CRASHED",
            CapabilityStatus::Configured => "CONFIGURED",
            CapabilityStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything known about one probed executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeRecord {
    /// Executor identifier.
    pub id: ExecutorId,
    /// Classification.
    #[serde(flatten)]
    pub status: CapabilityStatus,
    /// The probe's outcome, when the probe ran to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ProbeOutcome>,
    /// Whether override hints were passed to the probe.
    pub hinted: bool,
}

impl ProbeRecord {
    /// Whether the executor is configured.
    pub fn is_configured(&self) -> bool {
        self.status == CapabilityStatus::Configured
    }

    /// Probe feedback, empty when there is none.
    pub fn feedback(&self) -> &str {
        self.outcome.as_ref().map(ProbeOutcome::feedback).unwrap_or("")
    }

    /// Probe diagnostics, empty when there are none.
    pub fn errors(&self) -> &str {
        self.outcome.as_ref().map(ProbeOutcome::errors).unwrap_or("")
    }
}
