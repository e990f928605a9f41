//! External process execution.
//!
//! Every tool Ardent drives (pacman, git, patch, waf, autotools, meson) is
//! started through a [`CommandRunner`]. [`run_checked`] is the single entry
//! point the rest of the crate uses: it echoes the command line, runs it and
//! turns a non-zero exit into [`ArdentError::CommandFailed`].

use crate::error::{ArdentError, Result};
use crate::ui::UserInterface;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A fully described external command.
///
/// Commands are argument vectors, never shell strings, so nothing is
/// re-parsed by an intermediate shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program followed by its arguments.
    pub argv: Vec<String>,

    /// Working directory (inherits the current one when `None`).
    pub cwd: Option<PathBuf>,

    /// Environment overrides, merged over the inherited environment.
    pub env: BTreeMap<String, String>,

    /// Capture stdout instead of inheriting it.
    pub capture_stdout: bool,
}

impl Invocation {
    /// Create an invocation from an argument vector.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add one environment override.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add several environment overrides.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Capture stdout into the result.
    pub fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }

    /// The program name, or an empty string for an empty invocation.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }

    /// The command line as echoed to the user and embedded in errors.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    /// Working directory, if one was set.
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty unless capture was requested).
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            duration,
            success: false,
        }
    }
}

/// Something that can execute an [`Invocation`].
///
/// Implementations report the exit status; they do not turn a non-zero exit
/// into an error. That is [`run_checked`]'s job.
pub trait CommandRunner {
    /// Execute the invocation synchronously.
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        let start = Instant::now();

        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.argv.iter().skip(1));

        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        // Inherited environment stays in place; overrides win.
        cmd.envs(&invocation.env);

        cmd.stdin(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if invocation.capture_stdout {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let output = cmd.output().map_err(|source| ArdentError::SpawnFailed {
            command: invocation.command_line(),
            source,
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if output.status.success() {
            Ok(CommandResult::success(stdout, duration))
        } else {
            Ok(CommandResult::failure(output.status.code(), stdout, duration))
        }
    }
}

/// Pretends every command succeeded without running anything.
///
/// Used by `run --dry-run`; captured output is always empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunner;

impl CommandRunner for DryRunner {
    fn execute(&mut self, _invocation: &Invocation) -> Result<CommandResult> {
        Ok(CommandResult::success(String::new(), Duration::ZERO))
    }
}

/// Echo, execute and check a command.
///
/// The command line is shown through `ui` before execution. A non-zero exit
/// status becomes [`ArdentError::CommandFailed`] carrying the exit code and
/// the command line.
pub fn run_checked(
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
    invocation: &Invocation,
) -> Result<CommandResult> {
    let command_line = invocation.command_line();
    ui.command(&command_line);

    tracing::debug!(
        program = invocation.program(),
        cwd = ?invocation.cwd,
        env = ?invocation.env.keys().collect::<Vec<_>>(),
        "Executing: {}",
        command_line
    );

    let result = runner.execute(invocation)?;

    tracing::debug!(
        exit_code = ?result.exit_code,
        duration_ms = result.duration.as_millis() as u64,
        "Finished: {}",
        command_line
    );

    if result.success {
        Ok(result)
    } else {
        Err(ArdentError::CommandFailed {
            command: command_line,
            code: result.exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;

    #[test]
    fn invocation_builder_collects_parts() {
        let inv = Invocation::new(["make", "install"])
            .cwd("deps/liblo")
            .env("ACLOCAL_PATH", "/usr/share/aclocal")
            .capture_stdout();

        assert_eq!(inv.program(), "make");
        assert_eq!(inv.command_line(), "make install");
        assert_eq!(inv.working_dir(), Some(Path::new("deps/liblo")));
        assert_eq!(inv.env["ACLOCAL_PATH"], "/usr/share/aclocal");
        assert!(inv.capture_stdout);
    }

    #[test]
    fn envs_later_values_override_earlier() {
        let inv = Invocation::new(["true"])
            .env("A", "1")
            .envs([("A", "2"), ("B", "3")]);
        assert_eq!(inv.env["A"], "2");
        assert_eq!(inv.env["B"], "3");
    }

    #[test]
    fn empty_invocation_has_empty_program() {
        let inv = Invocation::default();
        assert_eq!(inv.program(), "");
        assert_eq!(inv.command_line(), "");
    }

    #[test]
    fn run_checked_echoes_before_running() {
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        run_checked(&mut runner, &mut ui, &Invocation::new(["git", "--version"])).unwrap();

        assert_eq!(ui.commands(), ["git --version"]);
        assert_eq!(runner.command_lines(), ["git --version"]);
    }

    #[test]
    fn run_checked_reports_exit_code_and_command_line() {
        let mut runner = RecordingRunner::new();
        runner.fail("meson compile", 3);
        let mut ui = MockUI::new();

        let err = run_checked(&mut runner, &mut ui, &Invocation::new(["meson", "compile"]))
            .unwrap_err();

        match err {
            ArdentError::CommandFailed { command, code } => {
                assert_eq!(command, "meson compile");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_checked_returns_captured_stdout() {
        let mut runner = RecordingRunner::new();
        runner.respond("pacman -Qq", "git\npatch\n");
        let mut ui = MockUI::new();

        let result = run_checked(
            &mut runner,
            &mut ui,
            &Invocation::new(["pacman", "-Qq"]).capture_stdout(),
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.stdout, "git\npatch\n");
    }

    #[test]
    fn dry_runner_never_fails() {
        let mut runner = DryRunner;
        let result = runner
            .execute(&Invocation::new(["definitely-not-a-real-program"]))
            .unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let mut runner = SystemRunner;
        let result = runner
            .execute(&Invocation::new(["sh", "-c", "echo hello"]).capture_stdout())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_failure_code() {
        let mut runner = SystemRunner;
        let result = runner
            .execute(&Invocation::new(["sh", "-c", "exit 4"]))
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(4));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_applies_env_and_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut runner = SystemRunner;
        let result = runner
            .execute(
                &Invocation::new(["sh", "-c", "echo $ARDENT_TEST_VAR; pwd"])
                    .cwd(temp.path())
                    .env("ARDENT_TEST_VAR", "from-override")
                    .capture_stdout(),
            )
            .unwrap();

        assert!(result.stdout.contains("from-override"));
        let canonical = temp.path().canonicalize().unwrap();
        let printed = result.stdout.lines().nth(1).unwrap();
        assert_eq!(Path::new(printed).canonicalize().unwrap(), canonical);
    }

    #[test]
    fn system_runner_missing_program_is_spawn_error() {
        let mut runner = SystemRunner;
        let err = runner
            .execute(&Invocation::new(["ardent-no-such-program-xyz"]))
            .unwrap_err();
        assert!(matches!(err, ArdentError::SpawnFailed { .. }));
    }
}
