//! Command-based executor probe.
//!
//! Finds the first candidate binary on the search path, asks it for its
//! version and reports `{ <executor id>: <binary path> }` as the fragment.

use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;

use crate::error::{JudgeconfError, Result};
use crate::host::{is_executable, resolve_tool_path, search_path};

use super::probe::{ExecutorId, OverrideHints, Probe, ProbeOutcome};

/// Hint key naming an explicit binary.
pub const HINT_PATH: &str = "path";

/// Hint key replacing the version query arguments (whitespace separated).
pub const HINT_VERSION_ARGS: &str = "version_args";

/// Probe that locates an executor binary and queries its version.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    id: ExecutorId,
    commands: Vec<String>,
    version_args: Vec<String>,
    search_path: Option<Vec<PathBuf>>,
}

impl CommandProbe {
    /// Create a probe for `id` trying `commands` in order.
    pub fn new(id: &str, commands: &[&str], version_args: &[&str]) -> Self {
        Self {
            id: ExecutorId::from(id),
            commands: commands.iter().map(|s| s.to_string()).collect(),
            version_args: version_args.iter().map(|s| s.to_string()).collect(),
            search_path: None,
        }
    }

    /// Create a probe from owned command lists (used for custom executors).
    pub fn from_parts(id: &str, commands: Vec<String>, version_args: Vec<String>) -> Self {
        Self {
            id: ExecutorId::from(id),
            commands,
            version_args,
            search_path: None,
        }
    }

    /// Search these directories instead of `PATH`.
    pub fn with_search_path(mut self, entries: Vec<PathBuf>) -> Self {
        self.search_path = Some(entries);
        self
    }

    /// Candidate command names in lookup order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    fn locate(&self) -> Option<PathBuf> {
        let entries = match &self.search_path {
            Some(entries) => entries.clone(),
            None => search_path(),
        };
        self.commands
            .iter()
            .find_map(|cmd| resolve_tool_path(cmd, &entries))
    }

    fn not_found(&self) -> ProbeOutcome {
        ProbeOutcome::failed(&format!(
            "none of [{}] found on search path",
            self.commands.join(", ")
        ))
    }

    fn query(&self, binary: &Path, version_args: &[String]) -> Result<ProbeOutcome> {
        let shown = binary.display().to_string();
        tracing::debug!("Querying {} {}", shown, version_args.join(" "));

        let output = Command::new(binary)
            .args(version_args)
            .output()
            .map_err(|e| JudgeconfError::ProbeFailed {
                executor: self.id.to_string(),
                message: format!("could not run {}: {}", shown, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Ok(ProbeOutcome::failed(&format!(
                "{} exited with status {} on version query",
                shown, status
            ))
            .with_config(self.id.as_str(), shown.as_str())
            .with_errors(stderr.trim()));
        }

        // Some toolchains (java, python2) print their banner on stderr.
        let banner = format!("{}\n{}", stdout, stderr);
        let feedback = match extract_version(&banner) {
            Some(version) => format!("using {} ({})", shown, version),
            None => format!("using {}", shown),
        };

        Ok(ProbeOutcome::configured()
            .with_config(self.id.as_str(), shown.as_str())
            .with_feedback(&feedback))
    }
}

impl Probe for CommandProbe {
    fn autodetect(&self) -> Result<ProbeOutcome> {
        match self.locate() {
            Some(binary) => self.query(&binary, &self.version_args),
            None => Ok(self.not_found()),
        }
    }

    fn autodetect_with_hints(&self, hints: &OverrideHints) -> Result<ProbeOutcome> {
        let version_args = hints
            .get(HINT_VERSION_ARGS)
            .map(|args| args.split_whitespace().map(str::to_string).collect())
            .unwrap_or_else(|| self.version_args.clone());

        let explicit = hints
            .get(HINT_PATH)
            .or_else(|| hints.get(self.id.as_str()));

        let Some(explicit) = explicit else {
            return match self.locate() {
                Some(binary) => self.query(&binary, &version_args),
                None => Ok(self.not_found()),
            };
        };

        let binary = PathBuf::from(explicit);
        if !binary.is_file() || !is_executable(&binary) {
            return Ok(ProbeOutcome::failed("configured path is not usable")
                .with_errors(&format!("{} is not an executable file", binary.display())));
        }
        self.query(&binary, &version_args)
    }
}

/// Extract a version number from a version banner.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
        r"(\d+\.\d+)",
    ];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path, body: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn extract_version_semver() {
        let output = "Python 3.12.1";
        assert_eq!(extract_version(output), Some("3.12.1".to_string()));
    }

    #[test]
    fn extract_version_with_v() {
        assert_eq!(extract_version("v20.11.0"), Some("20.11.0".to_string()));
    }

    #[test]
    fn extract_version_two_part() {
        assert_eq!(extract_version("Lua 5.4"), Some("5.4".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }

    #[test]
    fn missing_binary_is_declared_failure() {
        let temp = TempDir::new().unwrap();
        let probe = CommandProbe::new("python3", &["python3"], &["--version"])
            .with_search_path(vec![temp.path().to_path_buf()]);

        let outcome = probe.autodetect().unwrap();

        assert!(!outcome.success);
        assert!(outcome.config.is_empty());
        assert!(outcome.feedback().contains("python3"));
    }

    #[cfg(unix)]
    #[test]
    fn found_binary_is_configured_with_version() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("python3");
        create_fake_binary(&bin, "echo 'Python 3.11.4'");

        let probe = CommandProbe::new("python3", &["python3"], &["--version"])
            .with_search_path(vec![temp.path().to_path_buf()]);
        let outcome = probe.autodetect().unwrap();

        assert!(outcome.success);
        assert_eq!(
            outcome.config.get("python3"),
            Some(&serde_yaml::Value::from(bin.display().to_string()))
        );
        assert!(outcome.feedback().contains("3.11.4"));
    }

    #[cfg(unix)]
    #[test]
    fn later_candidate_used_when_first_missing() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("g++-12"), "echo 'g++ 12.2.0'");

        let probe = CommandProbe::new("g++", &["g++", "g++-12"], &["--version"])
            .with_search_path(vec![temp.path().to_path_buf()]);
        let outcome = probe.autodetect().unwrap();

        assert!(outcome.success);
        assert!(outcome.feedback().contains("g++-12"));
    }

    #[cfg(unix)]
    #[test]
    fn version_banner_on_stderr_is_read() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(
            &temp.path().join("java"),
            "echo 'openjdk version \"21.0.2\"' >&2",
        );

        let probe = CommandProbe::new("java", &["java"], &["-version"])
            .with_search_path(vec![temp.path().to_path_buf()]);
        let outcome = probe.autodetect().unwrap();

        assert!(outcome.success);
        assert!(outcome.feedback().contains("21.0.2"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_version_query_keeps_best_attempt_config() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ruby");
        create_fake_binary(&bin, "echo 'broken install' >&2\nexit 3");

        let probe = CommandProbe::new("ruby", &["ruby"], &["--version"])
            .with_search_path(vec![temp.path().to_path_buf()]);
        let outcome = probe.autodetect().unwrap();

        assert!(!outcome.success);
        assert!(outcome.config.contains_key("ruby"));
        assert_eq!(outcome.errors(), "broken install");
        assert!(outcome.feedback().contains("status 3"));
    }

    #[cfg(unix)]
    #[test]
    fn path_hint_overrides_search() {
        let temp = TempDir::new().unwrap();
        let on_path = temp.path().join("bin").join("python3");
        let explicit = temp.path().join("opt").join("python3");
        create_fake_binary(&on_path, "echo 'Python 3.8.0'");
        create_fake_binary(&explicit, "echo 'Python 3.13.0'");

        let probe = CommandProbe::new("python3", &["python3"], &["--version"])
            .with_search_path(vec![temp.path().join("bin")]);
        let hints = OverrideHints::new().with(HINT_PATH, &explicit.display().to_string());
        let outcome = probe.autodetect_with_hints(&hints).unwrap();

        assert!(outcome.success);
        assert!(outcome.feedback().contains("3.13.0"));
    }

    #[cfg(unix)]
    #[test]
    fn id_keyed_hint_is_accepted_as_path() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("python3.13");
        create_fake_binary(&explicit, "echo 'Python 3.13.0'");

        let probe = CommandProbe::new("python3", &["python3"], &["--version"])
            .with_search_path(vec![]);
        let hints = OverrideHints::new().with("python3", &explicit.display().to_string());
        let outcome = probe.autodetect_with_hints(&hints).unwrap();

        assert!(outcome.success);
    }

    #[test]
    fn unusable_path_hint_fails_with_errors() {
        let probe = CommandProbe::new("python3", &["python3"], &["--version"]);
        let hints = OverrideHints::new().with(HINT_PATH, "/nonexistent/python3");

        let outcome = probe.autodetect_with_hints(&hints).unwrap();

        assert!(!outcome.success);
        assert!(outcome.errors().contains("/nonexistent/python3"));
    }

    #[cfg(unix)]
    #[test]
    fn version_args_hint_replaces_query() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(
            &temp.path().join("lua"),
            "if [ \"$1\" = \"-v\" ]; then echo 'Lua 5.4.6'; else exit 1; fi",
        );

        let probe = CommandProbe::new("lua", &["lua"], &["--version"])
            .with_search_path(vec![temp.path().to_path_buf()]);
        let hints = OverrideHints::new().with(HINT_VERSION_ARGS, "-v");
        let outcome = probe.autodetect_with_hints(&hints).unwrap();

        assert!(outcome.success);
        assert!(outcome.feedback().contains("5.4.6"));
    }

    #[cfg(unix)]
    #[test]
    fn binary_that_cannot_start_is_a_probe_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ruby");
        fs::write(&path, "#!/nonexistent/interpreter\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let probe = CommandProbe::new("ruby", &["ruby"], &["--version"]);
        let hints = OverrideHints::new().with(HINT_PATH, &path.display().to_string());
        let err = probe.autodetect_with_hints(&hints).unwrap_err();

        match err {
            JudgeconfError::ProbeFailed { executor, message } => {
                assert_eq!(executor, "ruby");
                assert!(message.contains("could not run"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
