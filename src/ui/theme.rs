//! Visual theme and styling.

use console::Style;

/// judgeconf's visual theme.
#[derive(Debug, Clone)]
pub struct JudgeconfTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for section titles (bold underlined).
    pub section: Style,
    /// Style for executor ids and case names (bold).
    pub label: Style,
}

impl Default for JudgeconfTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl JudgeconfTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            section: Style::new().bold().underlined(),
            label: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            section: Style::new(),
            label: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        StatusKind::Success.format(self, msg)
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        StatusKind::Warning.format(self, msg)
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        StatusKind::Failed.format(self, msg)
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("⚖"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a status line: icon, padded label, dim detail.
    pub fn format_status(&self, kind: StatusKind, label: &str, detail: &str) -> String {
        let icon = kind.styled(self);
        let label = format!("{:<12}", label);
        if detail.is_empty() {
            format!("{} {}", icon, self.label.apply_to(label.trim_end()))
        } else {
            format!(
                "{} {} {}",
                icon,
                self.label.apply_to(label),
                self.dim.apply_to(detail)
            )
        }
    }
}

/// Kind of a status line, deciding its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failed,
    Skipped,
    Warning,
}

impl StatusKind {
    /// Unstyled icon.
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Success => "✓",
            StatusKind::Failed => "✗",
            StatusKind::Skipped => "○",
            StatusKind::Warning => "⚠",
        }
    }

    /// Icon styled with the theme.
    pub fn styled(&self, theme: &JudgeconfTheme) -> String {
        self.style(theme).apply_to(self.icon()).to_string()
    }

    /// Icon and message styled with the theme.
    pub fn format(&self, theme: &JudgeconfTheme, msg: &str) -> String {
        self.style(theme)
            .apply_to(format!("{} {}", self.icon(), msg))
            .to_string()
    }

    fn style<'a>(&self, theme: &'a JudgeconfTheme) -> &'a Style {
        match self {
            StatusKind::Success => &theme.success,
            StatusKind::Failed => &theme.error,
            StatusKind::Skipped => &theme.dim,
            StatusKind::Warning => &theme.warning,
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
