//! Shell environment guard.
//!
//! Ardent only works inside an MSYS2 MINGW64 shell: the package names,
//! prefixes and tools it drives all assume it. The guard runs before
//! anything with side effects.

use crate::config::ShellMarker;
use crate::error::{ArdentError, Result};

/// Check the marker against the process environment.
pub fn check_shell(marker: &ShellMarker) -> Result<()> {
    check_shell_with(marker, |key| std::env::var(key).ok())
}

/// Check the marker against an arbitrary variable lookup.
pub fn check_shell_with<F>(marker: &ShellMarker, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let found = lookup(&marker.variable);
    if found.as_deref() == Some(marker.expected.as_str()) {
        tracing::debug!("{}={} as required", marker.variable, marker.expected);
        return Ok(());
    }

    Err(ArdentError::WrongShell {
        variable: marker.variable.clone(),
        expected: marker.expected.clone(),
        found: found.unwrap_or_else(|| "<unset>".to_string()),
    })
}

/// Whether the marker matches, without building an error.
pub fn in_required_shell(marker: &ShellMarker) -> bool {
    check_shell(marker).is_ok()
}
