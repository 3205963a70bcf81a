//! Variable interpolation for test case commands.
//!
//! Case commands refer to runtime keys with `${key}`:
//!
//! ```yaml
//! command: "${gcc} main.c -o main && ./main"
//! ```
//!
//! `$${key}` produces a literal `${key}`.

use crate::error::{JudgeconfError, Result};
use std::collections::BTreeMap;

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing `${var}` interpolations.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                literal.push('$');
                if chars.peek() == Some(&'{') {
                    // $${...} stays literal up to the closing brace
                    for c in chars.by_ref() {
                        literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                }
            }
            Some('{') => {
                chars.next();
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
                segments.push(Segment::Variable(name.trim().to_string()));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Values available to `${...}` references.
///
/// Runtime keys win over builtins (`case_dir`, `problem_dir`).
#[derive(Debug, Default, Clone)]
pub struct InterpolationContext {
    /// Scalar entries of the merged runtime document.
    pub runtime: BTreeMap<String, String>,

    /// Values describing the case being run.
    pub builtins: BTreeMap<String, String>,
}

impl InterpolationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a runtime document's scalar entries.
    pub fn from_runtime(runtime: &BTreeMap<String, serde_yaml::Value>) -> Self {
        let runtime = runtime
            .iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.clone(), v)))
            .collect();
        Self {
            runtime,
            builtins: BTreeMap::new(),
        }
    }

    /// Add a builtin value.
    pub fn with_builtin(mut self, name: &str, value: &str) -> Self {
        self.builtins.insert(name.to_string(), value.to_string());
        self
    }

    /// Resolve a variable name to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.runtime
            .get(name)
            .or_else(|| self.builtins.get(name))
            .map(String::as_str)
    }
}

/// Render a YAML scalar as text; mappings and sequences have no text form.
pub fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolve all variables in an interpolated string.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any variable is not in the context.
pub fn resolve_string(input: &str, context: &InterpolationContext) -> Result<String> {
    let mut result = String::new();

    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => {
                let value =
                    context
                        .resolve(&name)
                        .ok_or_else(|| JudgeconfError::ConfigValidationError {
                            message: format!("Unresolved variable: ${{{}}}", name),
                        })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}
