//! Non-interactive UI for CI/headless environments.

use super::theme::JudgeconfTheme;
use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text, no spinners. Warnings and errors go to stderr so the rendered
/// runtime document on stdout stays clean.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: JudgeconfTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: JudgeconfTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", title);
        }
    }

    fn show_status(&mut self, kind: StatusKind, label: &str, detail: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.format_status(kind, label, detail));
        }
    }

    fn show_document(&mut self, text: &str) {
        if self.mode.shows_status() {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing; the final status line is printed separately.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn spinner_is_noop() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("Probing gcc");
        spinner.set_message("still probing");
        spinner.clear();
    }

    #[test]
    fn silent_mode_suppresses_status() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        ui.message("hidden");
        ui.show_status(StatusKind::Success, "gcc", "");
        ui.show_document("runtime: {}\n");
    }
}
