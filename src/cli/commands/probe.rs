//! Probe command implementation.
//!
//! The `judgeconf probe` command probes executors and prints the merged
//! runtime configuration without running any tests.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::error::Result;
use crate::host::{list_problem_dirs, problem_dir_lines, search_path, search_path_lines};
use crate::probing::combine;
use crate::report::Reporter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::pipeline::{
    build_catalog, build_registry, emit_document, load_project_config, render_format,
    run_probes,
};

/// The probe command implementation.
pub struct ProbeCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: ProbeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProbeArgs {
        &self.args
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_project_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let options = &self.args.probe;
        let catalog = build_catalog(&config);
        let registry = build_registry(&config, &catalog, options)?;

        ui.show_header("judgeconf probe");
        let mut reporter = Reporter::new(ui);

        let problem_dirs = list_problem_dirs(&config.tests.resolved_dirs(&self.project_root));
        reporter.host_listings(
            &search_path_lines(&search_path()),
            &problem_dir_lines(&problem_dirs),
        );

        let phase = run_probes(&mut reporter, &registry, &catalog);
        emit_document(
            &mut reporter,
            &phase,
            render_format(&config, options),
            options,
        )?;

        let code = combine(phase.run.verdict.is_failed(), 0);
        reporter.exit_status(code);

        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}
