//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{ArdentTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status and command lines go to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ArdentTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, styled if the terminal supports it.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, ArdentTheme::detect())
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: ArdentTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_status(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    // Commands are echoed in every mode.
    fn command(&mut self, command_line: &str) {
        writeln!(self.out, "{}", self.theme.format_command(command_line)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::with_theme(OutputMode::Quiet, ArdentTheme::plain());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_terminal_ui_writes_without_panicking() {
        let mut ui = TerminalUI::with_theme(OutputMode::Quiet, ArdentTheme::plain());
        ui.status("hidden");
        ui.command("hidden");
        ui.success("hidden");
    }
}
