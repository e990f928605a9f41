//! Recording command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning anything.
//! It records every invocation in order and answers from scripted
//! responses, matched by command-line prefix.
//!
//! # Example
//!
//! ```
//! use ardent::shell::{CommandRunner, Invocation, RecordingRunner};
//!
//! let mut runner = RecordingRunner::new();
//! runner.respond("pacman -Qq", "git\n");
//! runner.fail("make install", 2);
//!
//! let out = runner.execute(&Invocation::new(["pacman", "-Qq"])).unwrap();
//! assert_eq!(out.stdout, "git\n");
//!
//! let out = runner.execute(&Invocation::new(["make", "install"])).unwrap();
//! assert_eq!(out.exit_code, Some(2));
//!
//! assert_eq!(runner.command_lines(), ["pacman -Qq", "make install"]);
//! ```

use std::time::Duration;

use super::command::{CommandResult, CommandRunner, Invocation};
use crate::error::Result;

#[derive(Debug, Clone)]
struct Script {
    prefix: String,
    stdout: String,
    exit_code: i32,
}

/// Records invocations and replays scripted results.
///
/// Unscripted commands succeed with empty output. When several scripts
/// match, the one registered last wins.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: Vec<Invocation>,
    scripts: Vec<Script>,
}

impl RecordingRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `stdout` for commands starting with `prefix`.
    pub fn respond(&mut self, prefix: &str, stdout: &str) {
        self.scripts.push(Script {
            prefix: prefix.to_string(),
            stdout: stdout.to_string(),
            exit_code: 0,
        });
    }

    /// Exit with `code` for commands starting with `prefix`.
    pub fn fail(&mut self, prefix: &str, code: i32) {
        self.scripts.push(Script {
            prefix: prefix.to_string(),
            stdout: String::new(),
            exit_code: code,
        });
    }

    /// All recorded invocations, in execution order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Command lines of all recorded invocations, in execution order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(Invocation::command_line).collect()
    }

    /// Recorded invocations whose program is `program`.
    pub fn invocations_of(&self, program: &str) -> Vec<&Invocation> {
        self.invocations
            .iter()
            .filter(|inv| inv.program() == program)
            .collect()
    }

    /// Forget recorded invocations, keeping the scripts.
    pub fn clear(&mut self) {
        self.invocations.clear();
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        self.invocations.push(invocation.clone());

        let line = invocation.command_line();
        let script = self
            .scripts
            .iter()
            .rev()
            .find(|s| line.starts_with(&s.prefix));

        Ok(match script {
            Some(s) if s.exit_code == 0 => CommandResult::success(s.stdout.clone(), Duration::ZERO),
            Some(s) => CommandResult::failure(Some(s.exit_code), s.stdout.clone(), Duration::ZERO),
            None => CommandResult::success(String::new(), Duration::ZERO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_commands_succeed_silently() {
        let mut runner = RecordingRunner::new();
        let result = runner.execute(&Invocation::new(["git", "status"])).unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn later_scripts_take_precedence() {
        let mut runner = RecordingRunner::new();
        runner.respond("meson", "");
        runner.fail("meson compile", 1);

        assert!(runner.execute(&Invocation::new(["meson", "configure"])).unwrap().success);
        assert!(!runner.execute(&Invocation::new(["meson", "compile"])).unwrap().success);
    }

    #[test]
    fn invocations_of_filters_by_program() {
        let mut runner = RecordingRunner::new();
        runner.execute(&Invocation::new(["git", "clone", "x"])).unwrap();
        runner.execute(&Invocation::new(["patch", "-i", "p", "-p0"])).unwrap();
        runner.execute(&Invocation::new(["git", "clone", "y"])).unwrap();

        assert_eq!(runner.invocations_of("git").len(), 2);
        assert_eq!(runner.invocations_of("patch").len(), 1);
    }

    #[test]
    fn clear_keeps_scripts() {
        let mut runner = RecordingRunner::new();
        runner.fail("make", 2);
        runner.execute(&Invocation::new(["make"])).unwrap();
        runner.clear();

        assert!(runner.invocations().is_empty());
        assert!(!runner.execute(&Invocation::new(["make"])).unwrap().success);
    }
}
