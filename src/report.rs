//! Reporting sink.
//!
//! [`Reporter`] renders, in order, the host listings, the streamed probe
//! records, the merged runtime document, the test results and the final exit
//! status through a [`UserInterface`]. It only observes: nothing it receives is
//! altered or filtered before display.

use crate::config::{scalar_to_string, RenderFormat};
use crate::error::Result;
use crate::executors::RuntimeFragment;
use crate::probing::{
    CapabilityStatus, KeyCollision, ProbeEvent, ProbeRecord, ProbeRun, RuntimeConfig,
};
use crate::testsuite::{CaseOutcome, CaseResult, TestSummary};
use crate::ui::{format_duration, SpinnerHandle, StatusKind, UserInterface};

/// Indentation for lines printed under a status line.
const DETAIL_INDENT: &str = "      ";

/// Renders a judgeconf run through a [`UserInterface`].
pub struct Reporter<'a> {
    ui: &'a mut dyn UserInterface,
    spinner: Option<Box<dyn SpinnerHandle>>,
}

impl<'a> Reporter<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui, spinner: None }
    }

    /// The underlying UI, for command-specific messages.
    pub fn ui(&mut self) -> &mut dyn UserInterface {
        &mut *self.ui
    }

    /// Print the informational host listings.
    pub fn host_listings(&mut self, search_path: &[String], problem_dirs: &[String]) {
        if !self.ui.output_mode().shows_progress() {
            return;
        }
        self.listing("Search path", search_path);
        self.listing("Problem directories", problem_dirs);
    }

    fn listing(&mut self, title: &str, lines: &[String]) {
        self.ui.show_section(title);
        if lines.is_empty() {
            self.ui.message("  (none)");
        }
        for line in lines {
            self.ui.message(&format!("  {}", line));
        }
    }

    /// Handle one orchestrator event as it happens.
    pub fn probe_event(&mut self, event: ProbeEvent<'_>) {
        match event {
            ProbeEvent::Starting { id, index, total } => {
                if index == 0 {
                    self.ui.show_section("Executors");
                }
                self.spinner = Some(
                    self.ui
                        .start_spinner(&format!("[{}/{}] Probing {}", index + 1, total, id)),
                );
            }
            ProbeEvent::Finished(record) => {
                if let Some(mut spinner) = self.spinner.take() {
                    spinner.clear();
                }
                self.probe_record(record);
            }
        }
    }

    /// Print one probe record: a status line plus any diagnostics.
    pub fn probe_record(&mut self, record: &ProbeRecord) {
        self.ui.show_status(
            status_kind(&record.status),
            record.id.as_str(),
            &record_detail(record),
        );

        for line in record.errors().lines().filter(|l| !l.trim().is_empty()) {
            self.ui.message(&format!("{}{}", DETAIL_INDENT, line));
        }

        if let Some(outcome) = &record.outcome {
            if !outcome.success && !outcome.config.is_empty() {
                self.fragment("best attempt", &outcome.config);
            } else if outcome.success && self.ui.output_mode().shows_details() {
                self.fragment("config", &outcome.config);
            }
        }
    }

    fn fragment(&mut self, title: &str, fragment: &RuntimeFragment) {
        for (key, value) in fragment {
            self.ui.message(&format!(
                "{}{}: {} = {}",
                DETAIL_INDENT,
                title,
                key,
                display_value(value)
            ));
        }
    }

    /// Warn about runtime keys overwritten during aggregation.
    pub fn collisions(&mut self, collisions: &[KeyCollision]) {
        for collision in collisions {
            self.ui.warning(&format!(
                "Runtime key '{}' from {} was overwritten by {}",
                collision.key, collision.previous, collision.replaced_by
            ));
        }
    }

    /// Print the probing totals.
    pub fn probe_summary(&mut self, run: &ProbeRun) {
        let not_supported = run
            .records
            .iter()
            .filter(|r| r.status == CapabilityStatus::NotSupported)
            .count();
        let line = format!(
            "{} configured, {} not supported, {} failed",
            run.configured_count(),
            not_supported,
            run.failure_count()
        );
        if run.verdict.is_failed() {
            self.ui.warning(&line);
        } else {
            self.ui.success(&line);
        }
    }

    /// Print the merged runtime document.
    pub fn runtime_document(
        &mut self,
        runtime: &RuntimeConfig,
        format: RenderFormat,
    ) -> Result<()> {
        let rendered = runtime.render(format)?;
        self.ui.show_section("Runtime configuration");
        self.ui.show_document(&rendered);
        Ok(())
    }

    /// Announce the start of the test phase.
    pub fn tests_started(&mut self, problem_dirs: usize) {
        self.ui.show_section("Tests");
        if problem_dirs == 0 {
            self.ui.message("  No problem directories configured");
        }
    }

    /// Print one test case result as it finishes.
    pub fn case_result(&mut self, result: &CaseResult) {
        let (kind, detail) = match &result.outcome {
            CaseOutcome::Passed => (StatusKind::Success, format_duration(result.duration)),
            CaseOutcome::Failed { reason } => (StatusKind::Failed, reason.clone()),
            CaseOutcome::Skipped { reason } => (StatusKind::Skipped, reason.clone()),
        };
        self.ui.show_status(kind, &result.name, &detail);
    }

    /// Print the test totals, including the failure count.
    pub fn test_summary(&mut self, summary: &TestSummary) {
        let line = format!(
            "Tests: {} passed, {} failed, {} skipped",
            summary.passed, summary.failed, summary.skipped
        );
        if summary.failure_count() > 0 {
            self.ui.warning(&line);
        } else {
            self.ui.success(&line);
        }
    }

    /// Print the final exit status.
    pub fn exit_status(&mut self, code: i32) {
        if code == 0 {
            self.ui.success("Run succeeded (exit status 0)");
        } else {
            self.ui.error(&format!("Run failed (exit status {})", code));
        }
    }
}

/// Status line kind for a capability status.
pub fn status_kind(status: &CapabilityStatus) -> StatusKind {
    match status {
        CapabilityStatus::Configured => StatusKind::Success,
        CapabilityStatus::NotSupported => StatusKind::Skipped,
        CapabilityStatus::NotExposed
        | CapabilityStatus::ProbeCrashed { .. }
        | CapabilityStatus::Failed => StatusKind::Failed,
    }
}

/// Detail text shown next to a record's id.
pub fn record_detail(record: &ProbeRecord) -> String {
    let detail = match &record.status {
        CapabilityStatus::NotExposed => "not exposed by any executor".to_string(),
        CapabilityStatus::NotSupported => "autodetection not supported".to_string(),
        CapabilityStatus::ProbeCrashed { detail } => format!("probe crashed: {}", detail),
        CapabilityStatus::Configured | CapabilityStatus::Failed => {
            let feedback = record.feedback();
            if !feedback.is_empty() {
                feedback.to_string()
            } else {
                record.status.label().to_lowercase()
            }
        }
    };

    if record.hinted {
        format!("{} [hinted]", detail)
    } else {
        detail
    }
}

fn display_value(value: &serde_yaml::Value) -> String {
    scalar_to_string(value).unwrap_or_else(|| {
        serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
    })
}
