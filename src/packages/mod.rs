//! System package installation through pacman.
//!
//! The installed set is queried once, the missing set is the plain
//! difference against the required set, and everything missing goes to a
//! single `pacman -S` call.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// What the installer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every required package was already installed.
    AlreadySatisfied,
    /// These packages were installed, in the order passed to pacman.
    Installed(Vec<String>),
}

/// `pacman -Qq`: list installed package names.
pub fn query_invocation() -> Invocation {
    Invocation::new(["pacman", "-Qq"]).capture_stdout()
}

/// `pacman -S --noconfirm --needed <packages…>`.
pub fn install_invocation<'p, I>(packages: I) -> Invocation
where
    I: IntoIterator<Item = &'p String>,
{
    let mut argv = vec![
        "pacman".to_string(),
        "-S".to_string(),
        "--noconfirm".to_string(),
        "--needed".to_string(),
    ];
    argv.extend(packages.into_iter().cloned());
    Invocation::new(argv)
}

/// Parse `pacman -Qq` output: one package name per line.
pub fn parse_installed(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Required packages that are not installed.
pub fn missing_packages(
    required: &BTreeSet<String>,
    installed: &BTreeSet<String>,
) -> BTreeSet<String> {
    required.difference(installed).cloned().collect()
}

/// Query the installed package set.
pub fn installed_packages(ctx: &mut RunContext<'_>) -> Result<BTreeSet<String>> {
    let result = ctx.run(&query_invocation())?;
    let installed = parse_installed(&result.stdout);
    tracing::debug!("{} packages installed", installed.len());
    Ok(installed)
}

/// Install whatever part of `required` is missing.
pub fn install_missing(
    ctx: &mut RunContext<'_>,
    required: &BTreeSet<String>,
) -> Result<InstallOutcome> {
    ctx.ui.status("Checking packages...");

    let installed = installed_packages(ctx)?;
    let missing = missing_packages(required, &installed);

    if missing.is_empty() {
        ctx.ui
            .status("All system dependencies have already been installed.");
        return Ok(InstallOutcome::AlreadySatisfied);
    }

    tracing::info!("{} of {} packages missing", missing.len(), required.len());
    ctx.ui.status("Installing required dependencies...");
    ctx.run(&install_invocation(&missing))?;
    ctx.ui.status("Installed all required system dependencies.");

    Ok(InstallOutcome::Installed(missing.into_iter().collect()))
}
