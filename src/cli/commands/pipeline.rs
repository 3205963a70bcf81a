//! Steps shared by the commands that probe executors.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::cli::args::ProbeOptions;
use crate::config::{
    effective_hints, load_config, load_hints_file, validate_config, JudgeconfConfig,
    RenderFormat,
};
use crate::error::{JudgeconfError, Result};
use crate::executors::{builtin_catalog, register_custom, ExecutorCatalog};
use crate::probing::{aggregate, probe_all, Aggregate, CapabilityRegistry, ProbeRun};
use crate::report::Reporter;
use crate::ui::{OutputMode, UserInterface};

/// Load and validate the project config, reporting problems through the UI.
///
/// Returns `None` after printing the errors when the config is unusable.
pub fn load_project_config(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<JudgeconfConfig>> {
    let config = match load_config(project_root, config_override) {
        Ok(c) => c,
        Err(JudgeconfError::ConfigNotFound { path }) => {
            ui.error(&format!("Config file not found: {}", path.display()));
            return Ok(None);
        }
        Err(e @ JudgeconfError::ConfigParseError { .. }) => {
            ui.error(&e.to_string());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            ui.error(&format!("[{}] {}", error.rule, error.message));
        }
        return Ok(None);
    }

    // Apply config default_output when no CLI flag was explicitly set
    if ui.output_mode() == OutputMode::Normal {
        if let Some(mode) = config.settings.default_output {
            ui.set_output_mode(mode.into());
        }
    }

    Ok(Some(config))
}

/// Built-in executors plus the project's custom executors.
pub fn build_catalog(config: &JudgeconfConfig) -> ExecutorCatalog {
    let mut catalog = builtin_catalog();
    register_custom(&mut catalog, &config.custom_executors);
    catalog
}

/// Build the registry from config, a hints file and `--only`/`--skip`.
pub fn build_registry(
    config: &JudgeconfConfig,
    catalog: &ExecutorCatalog,
    options: &ProbeOptions,
) -> Result<CapabilityRegistry> {
    let rendered = match &options.hints {
        Some(path) => {
            tracing::debug!("Reading hints from {}", path.display());
            load_hints_file(path)?
        }
        None => BTreeMap::new(),
    };
    let hints = effective_hints(config, &rendered);

    CapabilityRegistry::from_config(config, catalog, &hints)
        .filtered(&options.only, &options.skip)
}

/// Result of the probing phase.
pub struct ProbePhase {
    pub run: ProbeRun,
    pub aggregate: Aggregate,
}

/// Probe every registry entry, streaming records to the reporter, then merge.
pub fn run_probes(
    reporter: &mut Reporter<'_>,
    registry: &CapabilityRegistry,
    catalog: &ExecutorCatalog,
) -> ProbePhase {
    let run = probe_all(registry, catalog, |event| reporter.probe_event(event));
    let aggregate = aggregate(&run.records);

    reporter.collisions(&aggregate.collisions);
    reporter.probe_summary(&run);

    ProbePhase { run, aggregate }
}

/// Render format chosen by `--json` or the config.
pub fn render_format(config: &JudgeconfConfig, options: &ProbeOptions) -> RenderFormat {
    if options.json {
        RenderFormat::Json
    } else {
        config.settings.render_format
    }
}

/// Print the runtime document and write it to `--output` when given.
pub fn emit_document(
    reporter: &mut Reporter<'_>,
    phase: &ProbePhase,
    format: RenderFormat,
    options: &ProbeOptions,
) -> Result<()> {
    reporter.runtime_document(&phase.aggregate.runtime, format)?;

    if let Some(path) = &options.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, phase.aggregate.runtime.render(format)?)?;
        reporter
            .ui()
            .message(&format!("Wrote runtime configuration to {}", path.display()));
    }

    Ok(())
}
