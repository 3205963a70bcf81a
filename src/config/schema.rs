//! Configuration schema definitions for judgeconf.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::executors::OverrideHints;

/// Root configuration structure for `.judgeconf/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JudgeconfConfig {
    /// Executors to probe, in probe order. Empty means every known executor.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub executors: Vec<String>,

    /// Per-executor override hints (e.g. an explicit interpreter path).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, OverrideHints>,

    /// Project-specific executors probed by binary lookup.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_executors: BTreeMap<String, CustomExecutor>,

    /// Test suite settings.
    pub tests: TestSettings,

    /// Global settings.
    pub settings: Settings,
}

/// A custom executor definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomExecutor {
    /// Candidate binaries, tried in order. Empty means no autodetection.
    #[serde(default)]
    pub commands: Vec<String>,

    /// Arguments that make the binary print its version.
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,

    /// Free-form description shown by `judgeconf list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// Test suite settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TestSettings {
    /// Whether to run the test suite after probing.
    pub enabled: bool,

    /// Problem directories, relative to the project root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problem_dirs: Vec<PathBuf>,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            problem_dirs: Vec::new(),
        }
    }
}

impl TestSettings {
    /// Problem directories resolved against the project root.
    pub fn resolved_dirs(&self, project_root: &Path) -> Vec<PathBuf> {
        self.problem_dirs
            .iter()
            .map(|dir| {
                if dir.is_absolute() {
                    dir.clone()
                } else {
                    project_root.join(dir)
                }
            })
            .collect()
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// Format for the rendered runtime document.
    pub render_format: RenderFormat,
}

/// Output verbosity from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

/// Serialization format for the runtime document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Yaml,
    Json,
}
