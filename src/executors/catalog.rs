//! Static mapping from executor id to its runnable unit.
//!
//! The catalog is assembled once at startup from the built-in table and any
//! custom executors declared in configuration. An id that is not in the
//! catalog resolves to `None`; an executor that exists but cannot autodetect
//! is an explicit [`ExecutorUnit::Unsupported`].

use std::collections::HashMap;

use super::probe::{ExecutorId, Probe};

/// A runnable executor unit.
pub enum ExecutorUnit {
    /// The executor exists but declares no autodetection.
    Unsupported,

    /// The executor can be probed.
    Probeable(Box<dyn Probe>),
}

impl ExecutorUnit {
    /// Whether the unit declares autodetection.
    pub fn supports_autodetect(&self) -> bool {
        matches!(self, ExecutorUnit::Probeable(_))
    }
}

impl std::fmt::Debug for ExecutorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutorUnit::Unsupported => f.write_str("Unsupported"),
            ExecutorUnit::Probeable(_) => f.write_str("Probeable(..)"),
        }
    }
}

/// Catalog of every executor known to this build.
#[derive(Debug, Default)]
pub struct ExecutorCatalog {
    order: Vec<ExecutorId>,
    units: HashMap<ExecutorId, ExecutorUnit>,
}

impl ExecutorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit. A later registration under the same id replaces the
    /// earlier unit but keeps its position.
    pub fn register(&mut self, id: impl Into<ExecutorId>, unit: ExecutorUnit) {
        let id = id.into();
        if self.units.insert(id.clone(), unit).is_some() {
            tracing::debug!("Executor '{}' replaced in catalog", id);
        } else {
            self.order.push(id);
        }
    }

    /// Resolve an executor id to its unit.
    pub fn resolve(&self, id: &ExecutorId) -> Option<&ExecutorUnit> {
        self.units.get(id)
    }

    /// Whether the catalog knows the id.
    pub fn contains(&self, id: &ExecutorId) -> bool {
        self.units.contains_key(id)
    }

    /// All ids in registration order.
    pub fn ids(&self) -> &[ExecutorId] {
        &self.order
    }

    /// Number of registered executors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
