//! Run command implementation.
//!
//! The `judgeconf run` command probes executors, prints the merged runtime
//! configuration, runs the test suite against the active executors and exits
//! non-zero if anything failed.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::JudgeconfConfig;
use crate::error::Result;
use crate::host::{list_problem_dirs, problem_dir_lines, search_path, search_path_lines};
use crate::probing::combine;
use crate::report::Reporter;
use crate::testsuite::{CaseResult, DirectoryRunner, TestRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::pipeline::{
    build_catalog, build_registry, emit_document, load_project_config, render_format,
    run_probes,
};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Problem directories from `--problems`, else from config.
    fn problem_dirs(&self, config: &JudgeconfConfig) -> Vec<PathBuf> {
        if self.args.problems.is_empty() {
            config.tests.resolved_dirs(&self.project_root)
        } else {
            self.args.problems.clone()
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_project_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let options = &self.args.probe;
        let catalog = build_catalog(&config);
        let registry = build_registry(&config, &catalog, options)?;
        let problem_dirs = self.problem_dirs(&config);

        ui.show_header("judgeconf");
        let mut reporter = Reporter::new(ui);

        reporter.host_listings(
            &search_path_lines(&search_path()),
            &problem_dir_lines(&list_problem_dirs(&problem_dirs)),
        );

        let phase = run_probes(&mut reporter, &registry, &catalog);
        emit_document(
            &mut reporter,
            &phase,
            render_format(&config, options),
            options,
        )?;

        let mut failures = 0;
        if self.args.no_tests || !config.tests.enabled {
            tracing::debug!("Test suite disabled");
        } else {
            reporter.tests_started(problem_dirs.len());
            let runner = DirectoryRunner::new(problem_dirs);
            let outcome = runner.run_all(
                &phase.aggregate.active,
                &phase.aggregate.runtime,
                &mut |result: &CaseResult| reporter.case_result(result),
            );
            match outcome {
                Ok(summary) => {
                    reporter.test_summary(&summary);
                    failures = summary.failure_count();
                }
                Err(e) => {
                    tracing::warn!("Test suite aborted: {}", e);
                    reporter.ui().error(&format!("Test suite aborted: {}", e));
                    failures = 1;
                }
            }
        }

        let code = combine(phase.run.verdict.is_failed(), failures);
        reporter.exit_status(code);

        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}
