//! Probe every registered executor and classify the results.
//!
//! Probing is sequential and fault-isolated: a probe that errors or panics is
//! recorded as `ProbeCrashed` and the next entry is probed as usual.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::executors::{
    ExecutorCatalog, ExecutorId, ExecutorUnit, OverrideHints, Probe, ProbeOutcome,
};

use super::registry::{CapabilityRegistry, RegistryEntry};
use super::status::{CapabilityStatus, ProbeRecord};
use super::verdict::RunVerdict;

/// Progress events emitted while probing.
#[derive(Debug)]
pub enum ProbeEvent<'a> {
    /// An executor is about to be probed.
    Starting {
        id: &'a ExecutorId,
        index: usize,
        total: usize,
    },
    /// An executor has been classified.
    Finished(&'a ProbeRecord),
}

/// Records of one probing pass plus the resulting verdict.
#[derive(Debug, Clone, Default)]
pub struct ProbeRun {
    /// One record per registry entry, in registry order.
    pub records: Vec<ProbeRecord>,
    /// Whether any record marked the run failed.
    pub verdict: RunVerdict,
}

impl ProbeRun {
    /// Number of records that marked the run failed.
    pub fn failure_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status.marks_failure())
            .count()
    }

    /// Number of configured executors.
    pub fn configured_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_configured()).count()
    }
}

/// Probe each registry entry in order.
///
/// Each record is passed to `on_event` as soon as it is produced.
pub fn probe_all(
    registry: &CapabilityRegistry,
    catalog: &ExecutorCatalog,
    mut on_event: impl FnMut(ProbeEvent<'_>),
) -> ProbeRun {
    let mut run = ProbeRun::default();
    let total = registry.len();

    for (index, entry) in registry.entries().iter().enumerate() {
        on_event(ProbeEvent::Starting {
            id: &entry.id,
            index,
            total,
        });

        let record = probe_entry(entry, catalog);

        if record.status.marks_failure() {
            run.verdict.mark_failed();
        }

        on_event(ProbeEvent::Finished(&record));
        run.records.push(record);
    }

    run
}

fn probe_entry(entry: &RegistryEntry, catalog: &ExecutorCatalog) -> ProbeRecord {
    let hinted = entry.hints.is_some();
    let record = |status, outcome| ProbeRecord {
        id: entry.id.clone(),
        status,
        outcome,
        hinted,
    };

    let probe = match catalog.resolve(&entry.id) {
        None => {
            warn!("Executor '{}' is not exposed by any unit", entry.id);
            return record(CapabilityStatus::NotExposed, None);
        }
        Some(ExecutorUnit::Unsupported) => {
            debug!("Executor '{}' does not support autodetection", entry.id);
            return record(CapabilityStatus::NotSupported, None);
        }
        Some(ExecutorUnit::Probeable(probe)) => probe,
    };

    debug!(
        "Probing '{}'{}",
        entry.id,
        if hinted { " with hints" } else { "" }
    );

    match invoke(probe.as_ref(), entry.hints.as_ref()) {
        Err(detail) => {
            warn!("Probe for '{}' crashed: {}", entry.id, detail);
            record(CapabilityStatus::ProbeCrashed { detail }, None)
        }
        Ok(outcome) if outcome.success => {
            info!("Configured '{}': {}", entry.id, outcome.feedback());
            record(CapabilityStatus::Configured, Some(outcome))
        }
        Ok(outcome) => {
            warn!(
                "Could not configure '{}': {} {}",
                entry.id,
                outcome.feedback(),
                outcome.errors()
            );
            record(CapabilityStatus::Failed, Some(outcome))
        }
    }
}

/// Run the probe, turning both error returns and panics into a fault text.
fn invoke(
    probe: &dyn Probe,
    hints: Option<&OverrideHints>,
) -> std::result::Result<ProbeOutcome, String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| match hints {
        Some(hints) => probe.autodetect_with_hints(hints),
        None => probe.autodetect(),
    }));

    match result {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "probe panicked".to_string()
    }
}
