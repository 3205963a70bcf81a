//! Configuration file discovery and loading.
//!
//! A project keeps its configuration in `.judgeconf/config.yml`, with
//! machine-specific tweaks in `.judgeconf/config.local.yml`. Both are
//! optional; a project without either runs with built-in defaults.

use crate::config::merger::merge_configs;
use crate::config::schema::JudgeconfConfig;
use crate::error::{JudgeconfError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".judgeconf";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .judgeconf/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .judgeconf/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config exists.
    pub fn has_any(&self) -> bool {
        self.project.is_some() || self.project_local.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.judgeconf` directory first, then falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JudgeconfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            JudgeconfError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| JudgeconfError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a typed config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<JudgeconfConfig> {
    if content.trim().is_empty() {
        return Ok(JudgeconfConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| JudgeconfError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<JudgeconfConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JudgeconfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            JudgeconfError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Load and merge the project's config layers.
///
/// Returns the default config when no layer exists.
pub fn load_merged_config(project_root: &Path) -> Result<JudgeconfConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_any() {
        tracing::debug!(
            "No config under {}, using defaults",
            project_root.join(CONFIG_DIR).display()
        );
        return Ok(JudgeconfConfig::default());
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);

    serde_yaml::from_value(merged).map_err(|e| JudgeconfError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<JudgeconfConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
