//! The probe contract every executor exposes.
//!
//! A probe inspects the host and reports how (or whether) an executor can be
//! configured. It returns a [`ProbeOutcome`] with named, independently
//! optional fields; an outcome without `errors` is the same as one with an
//! empty `errors`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Identifier naming one language executor (e.g. `python3`, `gcc`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutorId(String);

impl ExecutorId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExecutorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Configuration fragment produced by a single probe.
///
/// Keys are executor-specific (usually the executor id itself mapping to a
/// binary path).
pub type RuntimeFragment = BTreeMap<String, serde_yaml::Value>;

/// Operator-supplied hints that steer autodetection for one executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OverrideHints(BTreeMap<String, String>);

impl OverrideHints {
    /// Create an empty hint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hint, replacing any previous value for the key.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Look up a hint value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether no hints are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate hints in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill in keys from `other` that this set does not define.
    pub fn fill_from(&mut self, other: &OverrideHints) {
        for (key, value) in &other.0 {
            self.0.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}

impl FromIterator<(String, String)> for OverrideHints {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of probing one executor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeOutcome {
    /// How the executor was configured. May be empty, and may be populated on
    /// failure as a best-attempt diagnostic.
    pub config: RuntimeFragment,

    /// Whether the executor is usable.
    pub success: bool,

    /// Human-readable explanation, present regardless of success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// Diagnostic detail, only meaningful when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl ProbeOutcome {
    /// Create a successful outcome with an empty fragment.
    pub fn configured() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    /// Create a failed outcome.
    pub fn failed(feedback: &str) -> Self {
        Self {
            success: false,
            feedback: Some(feedback.to_string()),
            ..Default::default()
        }
    }

    /// Add a key to the configuration fragment.
    pub fn with_config(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.config.insert(key.to_string(), value.into());
        self
    }

    /// Set the feedback text.
    pub fn with_feedback(mut self, feedback: &str) -> Self {
        self.feedback = Some(feedback.to_string());
        self
    }

    /// Set the diagnostic text.
    pub fn with_errors(mut self, errors: &str) -> Self {
        self.errors = Some(errors.to_string());
        self
    }

    /// Feedback text, empty when absent.
    pub fn feedback(&self) -> &str {
        self.feedback.as_deref().unwrap_or("")
    }

    /// Diagnostic text, empty when absent.
    pub fn errors(&self) -> &str {
        self.errors.as_deref().unwrap_or("")
    }
}

/// Autodetection interface implemented by every probeable executor.
pub trait Probe {
    /// Detect and configure the executor with no outside input.
    fn autodetect(&self) -> Result<ProbeOutcome>;

    /// Detect the executor, steered by operator hints.
    ///
    /// Probes that take no hints inherit the plain autodetection.
    fn autodetect_with_hints(&self, hints: &OverrideHints) -> Result<ProbeOutcome> {
        let _ = hints;
        self.autodetect()
    }
}
