//! Test case definitions (`case.yml`).

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

use crate::config::interpolation::scalar_to_string;
use crate::error::{JudgeconfError, Result};

/// One test case, read from `<problem>/<case>/case.yml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    /// Executor the case needs; must be active for the case to run.
    pub executor: String,

    /// Shell command, with `${key}` references into the runtime document.
    pub command: String,

    /// Text fed to the command's stdin.
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub stdin: Option<String>,

    /// Expected stdout. Unquoted numbers and booleans are taken as text.
    #[serde(deserialize_with = "scalar_text")]
    pub expected_output: String,
}

fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| serde::de::Error::custom("expected a string, number or boolean"))
}

fn optional_scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("expected a string, number or boolean"))
}

impl TestCase {
    /// Load and validate a case file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse case content; `path` is used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let case: TestCase =
            serde_yaml::from_str(content).map_err(|e| JudgeconfError::InvalidTestCase {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if case.executor.trim().is_empty() {
            return Err(JudgeconfError::InvalidTestCase {
                path: path.to_path_buf(),
                message: "executor must not be empty".to_string(),
            });
        }
        if case.command.trim().is_empty() {
            return Err(JudgeconfError::InvalidTestCase {
                path: path.to_path_buf(),
                message: "command must not be empty".to_string(),
            });
        }

        Ok(case)
    }
}

/// Compare program output to the expected output.
///
/// Trailing whitespace on each line and trailing blank lines are ignored.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    normalize(actual) == normalize(expected)
}

/// First line (1-based) where the outputs differ after normalization.
pub fn first_difference(actual: &str, expected: &str) -> Option<usize> {
    let actual = normalize(actual);
    let expected = normalize(expected);
    let longest = actual.len().max(expected.len());
    (0..longest)
        .find(|&i| actual.get(i) != expected.get(i))
        .map(|i| i + 1)
}

fn normalize(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
