//! Configuration validation rules.
//!
//! - Executor ids in the probe list must be non-empty and unique
//! - Override hints must name a listed (or, with no list, any) executor
//! - Custom executors must have non-empty names and candidate commands

use crate::config::schema::JudgeconfConfig;
use crate::error::{JudgeconfError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Executor id if the error is executor-specific
    pub executor: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &JudgeconfConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_executor_list(config));
    errors.extend(validate_overrides(config));
    errors.extend(validate_custom_executors(config));

    errors
}

fn validate_executor_list(config: &JudgeconfConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for id in &config.executors {
        if id.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-executor-id".to_string(),
                message: "Executor list contains an empty id".to_string(),
                executor: None,
            });
            continue;
        }
        if !seen.insert(id.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-executor".to_string(),
                message: format!("Executor '{}' is listed more than once", id),
                executor: Some(id.clone()),
            });
        }
    }

    errors
}

fn validate_overrides(config: &JudgeconfConfig) -> Vec<ValidationError> {
    if config.executors.is_empty() {
        return Vec::new();
    }

    config
        .overrides
        .keys()
        .filter(|id| !config.executors.contains(id))
        .map(|id| ValidationError {
            rule: "unlisted-override".to_string(),
            message: format!(
                "Overrides given for '{}' which is not in the executor list",
                id
            ),
            executor: Some(id.clone()),
        })
        .collect()
}

fn validate_custom_executors(config: &JudgeconfConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, custom) in &config.custom_executors {
        if id.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-executor-id".to_string(),
                message: "Custom executor has an empty name".to_string(),
                executor: None,
            });
        }
        if custom.commands.iter().any(|c| c.trim().is_empty()) {
            errors.push(ValidationError {
                rule: "empty-command".to_string(),
                message: format!("Custom executor '{}' has an empty command", id),
                executor: Some(id.clone()),
            });
        }
    }

    errors
}

/// Validate and return the first error as a `JudgeconfError`.
pub fn validate(config: &JudgeconfConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(JudgeconfError::ConfigValidationError { message })
}
