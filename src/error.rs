//! Error types for Ardent operations.
//!
//! This module defines [`ArdentError`], the error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every variant is an unrecoverable step failure. Nothing below the
//! command dispatcher catches them: they propagate to `main`, which prints
//! the message and exits non-zero. Messages are written for the user, not
//! for machine parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Ardent operations.
#[derive(Debug, Error)]
pub enum ArdentError {
    /// Not running inside the expected MSYS2 shell.
    #[error(
        "Ardent should be executed from a MSYS2 {expected} shell ({variable}={found}). \
         If you don't have MSYS2, you can install it from https://www.msys2.org/."
    )]
    WrongShell {
        variable: String,
        expected: String,
        found: String,
    },

    /// External command exited with a non-zero status.
    #[error("Failed to run subprocess (exit code {}):\n{command}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// External command could not be started at all.
    #[error("Failed to start subprocess:\n{command}\n{source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

/// Result type alias for Ardent operations.
pub type Result<T> = std::result::Result<T, ArdentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_shell_mentions_msys2_and_marker() {
        let err = ArdentError::WrongShell {
            variable: "MSYSTEM".into(),
            expected: "MINGW64".into(),
            found: "UCRT64".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("MSYS2"));
        assert!(msg.contains("MINGW64"));
        assert!(msg.contains("MSYSTEM=UCRT64"));
        assert!(msg.contains("https://www.msys2.org/"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ArdentError::CommandFailed {
            command: "make install".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 2"));
        assert!(msg.ends_with("\nmake install"));
    }

    #[test]
    fn command_failed_without_code_mentions_signal() {
        let err = ArdentError::CommandFailed {
            command: "meson compile".into(),
            code: None,
        };
        assert!(err.to_string().contains("exit code signal"));
    }

    #[test]
    fn spawn_failed_displays_command_and_cause() {
        let err = ArdentError::SpawnFailed {
            command: "python3 waf configure".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 waf configure"));
        assert!(msg.contains("program not found"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ArdentError::ConfigParseError {
            path: PathBuf::from("/work/ardent.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/ardent.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ArdentError = io_err.into();
        assert!(matches!(err, ArdentError::Io(_)));
    }
}
