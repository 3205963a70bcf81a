//! List command implementation.
//!
//! The `judgeconf list` command lists known executors, whether each one will
//! be probed, and the host's search path and problem directories.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::JudgeconfConfig;
use crate::error::Result;
use crate::executors::{ExecutorCatalog, ExecutorId, BUILTIN_EXECUTORS};
use crate::host::{list_problem_dirs, problem_dir_lines, search_path, search_path_lines};
use crate::report::Reporter;
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::pipeline::{build_catalog, load_project_config};

/// One row of `judgeconf list`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutorListing {
    pub id: String,
    /// `builtin` or `custom`.
    pub source: &'static str,
    /// Candidate binaries, in lookup order.
    pub commands: Vec<String>,
    pub autodetect: bool,
    /// Whether the executor is in the probe list.
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Describe every catalog executor in catalog order.
pub fn executor_listings(
    config: &JudgeconfConfig,
    catalog: &ExecutorCatalog,
) -> Vec<ExecutorListing> {
    catalog
        .ids()
        .iter()
        .map(|id| {
            let selected =
                config.executors.is_empty() || config.executors.iter().any(|e| e == id.as_str());
            let autodetect = catalog
                .resolve(id)
                .map(|unit| unit.supports_autodetect())
                .unwrap_or(false);

            match config.custom_executors.get(id.as_str()) {
                Some(custom) => ExecutorListing {
                    id: id.to_string(),
                    source: "custom",
                    commands: custom.commands.clone(),
                    autodetect,
                    selected,
                    description: custom.description.clone(),
                },
                None => ExecutorListing {
                    id: id.to_string(),
                    source: "builtin",
                    commands: builtin_commands(id),
                    autodetect,
                    selected,
                    description: None,
                },
            }
        })
        .collect()
}

fn builtin_commands(id: &ExecutorId) -> Vec<String> {
    BUILTIN_EXECUTORS
        .iter()
        .find(|def| def.id == id.as_str())
        .map(|def| def.commands.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default()
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_project_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let catalog = build_catalog(&config);
        let listings = executor_listings(&config, &catalog);

        if self.args.json {
            ui.show_document(&format!("{}\n", serde_json::to_string_pretty(&listings)?));
            return Ok(CommandResult::success());
        }

        ui.show_section("Executors");
        for listing in &listings {
            let kind = match (listing.selected, listing.autodetect) {
                (true, true) => StatusKind::Success,
                (true, false) => StatusKind::Warning,
                (false, _) => StatusKind::Skipped,
            };
            let mut detail = if listing.commands.is_empty() {
                "no autodetection".to_string()
            } else {
                listing.commands.join(", ")
            };
            if listing.source == "custom" {
                detail.push_str(" (custom)");
            }
            if let Some(description) = &listing.description {
                detail.push_str(&format!(" - {}", description));
            }
            ui.show_status(kind, &listing.id, &detail);
        }

        let problem_dirs = list_problem_dirs(&config.tests.resolved_dirs(&self.project_root));
        Reporter::new(ui).host_listings(
            &search_path_lines(&search_path()),
            &problem_dir_lines(&problem_dirs),
        );

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn listings_mark_selection_and_source() {
        let config: JudgeconfConfig = serde_yaml::from_str(
            "executors: [python3, zig]\ncustom_executors:\n  zig:\n    commands: [zig]\n    version_args: [version]\n    description: Zig compiler\n",
        )
        .unwrap();
        let catalog = build_catalog(&config);
        let listings = executor_listings(&config, &catalog);

        let python = listings.iter().find(|l| l.id == "python3").unwrap();
        assert!(python.selected);
        assert_eq!(python.source, "builtin");
        assert_eq!(python.commands, ["python3", "python"]);

        let zig = listings.iter().find(|l| l.id == "zig").unwrap();
        assert_eq!(zig.source, "custom");
        assert_eq!(zig.description.as_deref(), Some("Zig compiler"));

        let text = listings.iter().find(|l| l.id == "text").unwrap();
        assert!(!text.selected);
        assert!(!text.autodetect);
    }

    #[test]
    fn list_shows_every_executor() {
        let temp = setup_project("executors: [python3]\n");
        let mut ui = MockUI::new();

        let result = ListCommand::new(temp.path(), None, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_status(StatusKind::Success, "python3"));
        assert!(ui.has_status(StatusKind::Skipped, "gcc"));
        assert!(ui.sections().iter().any(|s| s == "Search path"));
    }

    #[test]
    fn list_json_is_parseable() {
        let temp = setup_project("{}\n");
        let mut ui = MockUI::new();

        ListCommand::new(temp.path(), None, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert!(rows.as_array().unwrap().iter().all(|r| r["selected"] == true));
    }
}
