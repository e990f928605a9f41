//! Console output for the build run.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output, styled when the terminal allows it
//! - [`MockUI`] for capturing output in tests
//!
//! Three visual registers are used: echoed command lines, status messages
//! and errors. Each has its own colour in [`ArdentTheme`].
//!
//! # Example
//!
//! ```
//! use ardent::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status("Fetching libraries...");
//! ui.command("git clone --recurse-submodules https://github.com/x42/libltc");
//!
//! assert!(ui.has_status("Fetching"));
//! assert_eq!(ui.commands().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ArdentTheme};

/// Trait for user-facing console output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a status message (progress through the run).
    fn status(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Echo a command line before it is executed.
    fn command(&mut self, command_line: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
