//! Fold probe records into a runtime document and the active executor set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RenderFormat;
use crate::error::Result;
use crate::executors::{ExecutorId, RuntimeFragment};

use super::status::ProbeRecord;

/// Merged configuration of every configured executor.
///
/// Serializes as `{runtime: {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Merged key/value entries.
    #[serde(default)]
    pub runtime: RuntimeFragment,
}

impl RuntimeConfig {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a merged value.
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.runtime.get(key)
    }

    /// Number of merged keys.
    pub fn len(&self) -> usize {
        self.runtime.len()
    }

    /// Whether no keys were merged.
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty()
    }

    /// Render the document in the given format.
    pub fn render(&self, format: RenderFormat) -> Result<String> {
        Ok(match format {
            RenderFormat::Yaml => serde_yaml::to_string(self)?,
            RenderFormat::Json => serde_json::to_string_pretty(self)? + "\n",
        })
    }
}

/// One configured executor, carrying the fragment it was configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveExecutor {
    pub id: ExecutorId,
    pub config: RuntimeFragment,
}

/// Executors that probed successfully, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveExecutors {
    executors: Vec<ActiveExecutor>,
}

impl ActiveExecutors {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an executor.
    pub fn register(&mut self, id: ExecutorId, config: RuntimeFragment) {
        self.executors.push(ActiveExecutor { id, config });
    }

    /// Whether `id` is active.
    pub fn contains(&self, id: &str) -> bool {
        self.executors.iter().any(|e| e.id.as_str() == id)
    }

    /// Look up an active executor.
    pub fn get(&self, id: &str) -> Option<&ActiveExecutor> {
        self.executors.iter().find(|e| e.id.as_str() == id)
    }

    /// Active ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &ExecutorId> {
        self.executors.iter().map(|e| &e.id)
    }

    /// Iterate active executors.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveExecutor> {
        self.executors.iter()
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

/// A key written by more than one configured executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    /// Executor whose value was replaced.
    pub previous: ExecutorId,
    /// Executor whose value was kept.
    pub replaced_by: ExecutorId,
}

/// Result of aggregation.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub runtime: RuntimeConfig,
    pub active: ActiveExecutors,
    pub collisions: Vec<KeyCollision>,
}

/// Merge the fragments of configured records, in record order.
///
/// Later records overwrite earlier ones key by key. Records that are not
/// `Configured` contribute nothing, even when they carry a fragment.
pub fn aggregate(records: &[ProbeRecord]) -> Aggregate {
    let mut result = Aggregate::default();
    let mut owners: HashMap<String, ExecutorId> = HashMap::new();

    for record in records.iter().filter(|r| r.is_configured()) {
        let fragment = record
            .outcome
            .as_ref()
            .map(|o| o.config.clone())
            .unwrap_or_default();

        for (key, value) in &fragment {
            if let Some(previous) = owners.insert(key.clone(), record.id.clone()) {
                if previous != record.id {
                    tracing::warn!(
                        "Runtime key '{}' from '{}' replaced by '{}'",
                        key,
                        previous,
                        record.id
                    );
                    result.collisions.push(KeyCollision {
                        key: key.clone(),
                        previous,
                        replaced_by: record.id.clone(),
                    });
                }
            }
            result.runtime.runtime.insert(key.clone(), value.clone());
        }

        result.active.register(record.id.clone(), fragment);
    }

    result
}
