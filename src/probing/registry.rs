//! The ordered list of executors to probe.
//!
//! Registry order is probe order, report order, and merge order. Ids are not
//! required to exist in the catalog; unknown ids surface as `NotExposed`.

use std::collections::BTreeMap;

use crate::config::JudgeconfConfig;
use crate::error::{JudgeconfError, Result};
use crate::executors::{ExecutorCatalog, ExecutorId, OverrideHints};

/// One executor to probe, with optional hints.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    /// Executor identifier.
    pub id: ExecutorId,
    /// Hints forwarded to `autodetect_with_hints`, if any.
    pub hints: Option<OverrideHints>,
}

impl RegistryEntry {
    /// Entry without hints.
    pub fn new(id: impl Into<ExecutorId>) -> Self {
        Self {
            id: id.into(),
            hints: None,
        }
    }

    /// Entry with hints. Empty hints count as none.
    pub fn with_hints(id: impl Into<ExecutorId>, hints: OverrideHints) -> Self {
        Self {
            id: id.into(),
            hints: if hints.is_empty() { None } else { Some(hints) },
        }
    }
}

/// Ordered collection of registry entries.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    entries: Vec<RegistryEntry>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: RegistryEntry) {
        self.entries.push(entry);
    }

    /// Build the registry from configuration.
    ///
    /// The configured `executors:` list sets the order; when it is empty every
    /// catalog executor is probed in catalog order. Hints are attached by id.
    pub fn from_config(
        config: &JudgeconfConfig,
        catalog: &ExecutorCatalog,
        hints: &BTreeMap<ExecutorId, OverrideHints>,
    ) -> Self {
        let ids: Vec<ExecutorId> = if config.executors.is_empty() {
            catalog.ids().to_vec()
        } else {
            config.executors.iter().map(|id| ExecutorId::new(id.clone())).collect()
        };

        let entries = ids
            .into_iter()
            .map(|id| match hints.get(&id) {
                Some(h) => RegistryEntry::with_hints(id, h.clone()),
                None => RegistryEntry::new(id),
            })
            .collect();

        Self { entries }
    }

    /// Keep only `only` (when non-empty) and drop `skip`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownExecutor` if a name in either list is not registered.
    pub fn filtered(self, only: &[String], skip: &[String]) -> Result<Self> {
        for name in only.iter().chain(skip) {
            if !self.entries.iter().any(|e| e.id.as_str() == name) {
                return Err(JudgeconfError::UnknownExecutor { name: name.clone() });
            }
        }

        let entries = self
            .entries
            .into_iter()
            .filter(|e| only.is_empty() || only.iter().any(|o| o == e.id.as_str()))
            .filter(|e| !skip.iter().any(|s| s == e.id.as_str()))
            .collect();

        Ok(Self { entries })
    }

    /// Entries in registry order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RegistryEntry> for CapabilityRegistry {
    fn from_iter<I: IntoIterator<Item = RegistryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executors::ExecutorUnit;

    fn catalog() -> ExecutorCatalog {
        let mut catalog = ExecutorCatalog::new();
        catalog.register("python3", ExecutorUnit::Unsupported);
        catalog.register("gcc", ExecutorUnit::Unsupported);
        catalog.register("text", ExecutorUnit::Unsupported);
        catalog
    }

    fn ids(registry: &CapabilityRegistry) -> Vec<&str> {
        registry.entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn empty_executor_list_uses_catalog_order() {
        let registry =
            CapabilityRegistry::from_config(&JudgeconfConfig::default(), &catalog(), &BTreeMap::new());
        assert_eq!(ids(&registry), vec!["python3", "gcc", "text"]);
    }

    #[test]
    fn configured_list_sets_order_and_may_name_unknown_ids() {
        let config = JudgeconfConfig {
            executors: vec!["gcc".into(), "cobol".into(), "python3".into()],
            ..Default::default()
        };
        let registry = CapabilityRegistry::from_config(&config, &catalog(), &BTreeMap::new());
        assert_eq!(ids(&registry), vec!["gcc", "cobol", "python3"]);
    }

    #[test]
    fn hints_attach_by_id() {
        let mut hints = BTreeMap::new();
        hints.insert(
            ExecutorId::from("gcc"),
            OverrideHints::new().with("path", "/opt/gcc/bin/gcc"),
        );
        let registry = CapabilityRegistry::from_config(&JudgeconfConfig::default(), &catalog(), &hints);

        let gcc = &registry.entries()[1];
        assert_eq!(gcc.hints.as_ref().and_then(|h| h.get("path")), Some("/opt/gcc/bin/gcc"));
        assert!(registry.entries()[0].hints.is_none());
    }

    #[test]
    fn empty_hints_count_as_none() {
        let entry = RegistryEntry::with_hints("gcc", OverrideHints::new());
        assert!(entry.hints.is_none());
    }

    #[test]
    fn only_and_skip_filter_preserving_order() {
        let registry =
            CapabilityRegistry::from_config(&JudgeconfConfig::default(), &catalog(), &BTreeMap::new());

        let only = registry
            .clone()
            .filtered(&["text".into(), "python3".into()], &[])
            .unwrap();
        assert_eq!(ids(&only), vec!["python3", "text"]);

        let skipped = registry.filtered(&[], &["gcc".into()]).unwrap();
        assert_eq!(ids(&skipped), vec!["python3", "text"]);
    }

    #[test]
    fn filtering_by_unregistered_name_errors() {
        let registry =
            CapabilityRegistry::from_config(&JudgeconfConfig::default(), &catalog(), &BTreeMap::new());
        let err = registry.filtered(&["fortran".into()], &[]).unwrap_err();
        assert!(matches!(err, JudgeconfError::UnknownExecutor { name } if name == "fortran"));
    }
}
