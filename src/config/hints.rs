//! Override hints loaded from a previously rendered runtime document.
//!
//! `judgeconf probe --output runtime.yml` writes `{runtime: {...}}`. Passing
//! that file back with `--hints runtime.yml` pins every executor whose id
//! appears as a `runtime` key to the recorded value.

use crate::config::interpolation::scalar_to_string;
use crate::config::schema::JudgeconfConfig;
use crate::error::{JudgeconfError, Result};
use crate::executors::{ExecutorId, OverrideHints};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct RenderedDocument {
    #[serde(default)]
    runtime: BTreeMap<String, serde_yaml::Value>,
}

/// Parse a rendered runtime document into per-executor hints.
///
/// Every scalar `runtime` entry becomes `{key: value}` under its own key.
/// Non-scalar entries are skipped.
pub fn parse_hints(content: &str, source_path: &Path) -> Result<BTreeMap<ExecutorId, OverrideHints>> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    // JSON is a subset of YAML, so one parser handles both render formats.
    let doc: RenderedDocument =
        serde_yaml::from_str(content).map_err(|e| JudgeconfError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut hints = BTreeMap::new();
    for (key, value) in doc.runtime {
        match scalar_to_string(&value) {
            Some(text) => {
                hints.insert(
                    ExecutorId::new(key.clone()),
                    OverrideHints::new().with(&key, &text),
                );
            }
            None => tracing::warn!("Ignoring non-scalar runtime key '{}' in hints", key),
        }
    }

    Ok(hints)
}

/// Load hints from a rendered runtime document on disk.
pub fn load_hints_file(path: &Path) -> Result<BTreeMap<ExecutorId, OverrideHints>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JudgeconfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            JudgeconfError::Io(e)
        }
    })?;
    parse_hints(&content, path)
}

/// Combine config `overrides:` with hints from a rendered document.
///
/// Explicit overrides take precedence key by key.
pub fn effective_hints(
    config: &JudgeconfConfig,
    rendered: &BTreeMap<ExecutorId, OverrideHints>,
) -> BTreeMap<ExecutorId, OverrideHints> {
    let mut merged: BTreeMap<ExecutorId, OverrideHints> = config
        .overrides
        .iter()
        .map(|(id, hints)| (ExecutorId::new(id.clone()), hints.clone()))
        .collect();

    for (id, hints) in rendered {
        merged.entry(id.clone()).or_default().fill_from(hints);
    }

    merged.retain(|_, hints| !hints.is_empty());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn runtime_keys_become_hints() {
        let content = "runtime:\n  python3: /usr/bin/python3\n  gcc: /usr/bin/gcc\n";
        let hints = parse_hints(content, Path::new("runtime.yml")).unwrap();

        assert_eq!(hints.len(), 2);
        assert_eq!(
            hints[&ExecutorId::from("python3")].get("python3"),
            Some("/usr/bin/python3")
        );
    }

    #[test]
    fn json_render_is_accepted() {
        let content = r#"{"runtime": {"node": "/usr/local/bin/node"}}"#;
        let hints = parse_hints(content, Path::new("runtime.json")).unwrap();
        assert_eq!(
            hints[&ExecutorId::from("node")].get("node"),
            Some("/usr/local/bin/node")
        );
    }

    #[test]
    fn non_scalar_entries_are_skipped() {
        let content = "runtime:\n  java:\n    home: /usr/lib/jvm\n  ruby: /usr/bin/ruby\n";
        let hints = parse_hints(content, Path::new("runtime.yml")).unwrap();
        assert_eq!(hints.len(), 1);
        assert!(hints.contains_key(&ExecutorId::from("ruby")));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = parse_hints("runtime: [", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(err, JudgeconfError::ConfigParseError { .. }));
    }

    #[test]
    fn missing_hints_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_hints_file(&temp.path().join("runtime.yml")).unwrap_err();
        assert!(matches!(err, JudgeconfError::ConfigNotFound { .. }));
    }

    #[test]
    fn config_overrides_win_over_rendered_hints() {
        let mut config = JudgeconfConfig::default();
        config.overrides.insert(
            "python3".into(),
            OverrideHints::new().with("python3", "/opt/python/bin/python3"),
        );

        let mut rendered = BTreeMap::new();
        rendered.insert(
            ExecutorId::from("python3"),
            OverrideHints::new().with("python3", "/usr/bin/python3"),
        );
        rendered.insert(
            ExecutorId::from("gcc"),
            OverrideHints::new().with("gcc", "/usr/bin/gcc"),
        );

        let merged = effective_hints(&config, &rendered);

        assert_eq!(
            merged[&ExecutorId::from("python3")].get("python3"),
            Some("/opt/python/bin/python3")
        );
        assert_eq!(merged[&ExecutorId::from("gcc")].get("gcc"), Some("/usr/bin/gcc"));
    }
}
