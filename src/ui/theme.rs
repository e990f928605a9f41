//! Visual theme and styling.

use console::Style;

/// Ardent's visual theme.
///
/// Command lines are bright blue, status messages bright cyan and errors
/// bright red.
#[derive(Debug, Clone)]
pub struct ArdentTheme {
    /// Style for echoed command lines.
    pub command: Style,
    /// Style for status messages.
    pub status: Style,
    /// Style for success messages.
    pub success: Style,
    /// Style for warning messages.
    pub warning: Style,
    /// Style for error messages.
    pub error: Style,
    /// Style for headers.
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for ArdentTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ArdentTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            command: Style::new().blue().bright(),
            status: Style::new().cyan().bright(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bright(),
            header: Style::new().bold().cyan().bright(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            command: Style::new(),
            status: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the coloured theme when the terminal can render it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an echoed command line.
    pub fn format_command(&self, command_line: &str) -> String {
        format!("{}", self.command.apply_to(format!("> {}", command_line)))
    }

    /// Format a status message.
    pub fn format_status(&self, msg: &str) -> String {
        format!("{}", self.status.apply_to(msg))
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
///
/// Styling is an optional capability. Any reason it is unavailable
/// (`NO_COLOR`, redirected output, a console without ANSI support) yields
/// `false` and the run continues unstyled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    let term = console::Term::stdout();
    term.is_term() && term.features().colors_supported()
}
