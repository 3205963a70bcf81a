//! Run test cases against the active executors.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::interpolation::{resolve_string, InterpolationContext};
use crate::error::Result;
use crate::host::{list_cases, CASE_FILE};
use crate::probing::{ActiveExecutors, RuntimeConfig};
use crate::shell::execute_in;

use super::case::{first_difference, outputs_match, TestCase};

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed { reason: String },
    Skipped { reason: String },
}

/// Result of one test case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// `<problem>/<case>` display name.
    pub name: String,
    /// Executor named by the case, when the case file could be read.
    pub executor: Option<String>,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

/// Totals over all cases.
#[derive(Debug, Clone, Default)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub results: Vec<CaseResult>,
}

impl TestSummary {
    /// Count a result.
    pub fn record(&mut self, result: CaseResult) {
        match result.outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed { .. } => self.failed += 1,
            CaseOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.results.push(result);
    }

    /// Number of failing cases.
    pub fn failure_count(&self) -> usize {
        self.failed
    }

    /// Total number of cases seen.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// Runs every discovered case and reports a failure count.
pub trait TestRunner {
    /// Run all cases, reporting each result through `on_case` as it finishes.
    fn run_all(
        &self,
        active: &ActiveExecutors,
        runtime: &RuntimeConfig,
        on_case: &mut dyn FnMut(&CaseResult),
    ) -> Result<TestSummary>;
}

/// Runner over problem directories of `<problem>/<case>/case.yml`.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRunner {
    problem_dirs: Vec<PathBuf>,
}

impl DirectoryRunner {
    /// Create a runner over the given problem directories.
    pub fn new(problem_dirs: Vec<PathBuf>) -> Self {
        Self { problem_dirs }
    }

    /// Problem directories in run order.
    pub fn problem_dirs(&self) -> &[PathBuf] {
        &self.problem_dirs
    }

    fn run_case(
        &self,
        problem_dir: &Path,
        case_name: &str,
        active: &ActiveExecutors,
        runtime: &RuntimeConfig,
    ) -> CaseResult {
        let start = Instant::now();
        let case_dir = problem_dir.join(case_name);
        let problem_name = problem_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| problem_dir.display().to_string());
        let name = format!("{}/{}", problem_name, case_name);

        let finish = |executor: Option<String>, outcome: CaseOutcome| CaseResult {
            name: name.clone(),
            executor,
            outcome,
            duration: start.elapsed(),
        };

        let case = match TestCase::load(&case_dir.join(CASE_FILE)) {
            Ok(case) => case,
            Err(e) => {
                return finish(
                    None,
                    CaseOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };
        let executor = Some(case.executor.clone());

        if !active.contains(&case.executor) {
            return finish(
                executor,
                CaseOutcome::Skipped {
                    reason: format!("executor '{}' is not active", case.executor),
                },
            );
        }

        let context = InterpolationContext::from_runtime(&runtime.runtime)
            .with_builtin("case_dir", &case_dir.display().to_string())
            .with_builtin("problem_dir", &problem_dir.display().to_string());

        let command = match resolve_string(&case.command, &context) {
            Ok(command) => command,
            Err(e) => {
                return finish(
                    executor,
                    CaseOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        debug!("Running case {}: {}", name, command);

        let result = match execute_in(&command, &case_dir, case.stdin.as_deref()) {
            Ok(result) => result,
            Err(e) => {
                return finish(
                    executor,
                    CaseOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        if !result.success {
            let status = result
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            let stderr = result.stderr.lines().next().unwrap_or("").trim();
            let reason = if stderr.is_empty() {
                format!("exited with status {}", status)
            } else {
                format!("exited with status {}: {}", status, stderr)
            };
            return finish(executor, CaseOutcome::Failed { reason });
        }

        if outputs_match(&result.stdout, &case.expected_output) {
            finish(executor, CaseOutcome::Passed)
        } else {
            let line = first_difference(&result.stdout, &case.expected_output).unwrap_or(1);
            finish(
                executor,
                CaseOutcome::Failed {
                    reason: format!("wrong output at line {}", line),
                },
            )
        }
    }
}

impl TestRunner for DirectoryRunner {
    fn run_all(
        &self,
        active: &ActiveExecutors,
        runtime: &RuntimeConfig,
        on_case: &mut dyn FnMut(&CaseResult),
    ) -> Result<TestSummary> {
        let mut summary = TestSummary::default();

        for dir in &self.problem_dirs {
            let cases = match list_cases(dir) {
                Ok(cases) => cases,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("Problem directory {} does not exist", dir.display());
                    continue;
                }
                Err(e) => {
                    warn!("Cannot list problem directory {}: {}", dir.display(), e);
                    let result = CaseResult {
                        name: dir.display().to_string(),
                        executor: None,
                        outcome: CaseOutcome::Failed {
                            reason: format!("cannot list cases: {}", e),
                        },
                        duration: Duration::ZERO,
                    };
                    on_case(&result);
                    summary.record(result);
                    continue;
                }
            };

            for case_name in cases {
                let result = self.run_case(dir, &case_name, active, runtime);
                on_case(&result);
                summary.record(result);
            }
        }

        Ok(summary)
    }
}
