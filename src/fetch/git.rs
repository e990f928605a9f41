//! Cloning dependency repositories.

use std::fs;

use crate::config::Dependency;
use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// Result of a clone attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
    /// The checkout directory did not exist and was just cloned.
    FreshlyCloned,
    /// The checkout directory already existed; nothing was done.
    AlreadyPresent,
}

impl CloneOutcome {
    /// Whether this clone created the checkout.
    pub fn is_fresh(self) -> bool {
        matches!(self, Self::FreshlyCloned)
    }
}

/// `git clone --recurse-submodules <url>`.
pub fn clone_invocation(url: &str) -> Invocation {
    Invocation::new(["git", "clone", "--recurse-submodules", url])
}

/// Clone `dep` into the deps directory unless its checkout already exists.
pub fn clone_if_absent(ctx: &mut RunContext<'_>, dep: &Dependency) -> Result<CloneOutcome> {
    let checkout = ctx.checkout_path(dep.dir_name());
    if checkout.is_dir() {
        tracing::debug!("{} already present, not cloning", checkout.display());
        return Ok(CloneOutcome::AlreadyPresent);
    }

    let deps = ctx.deps_path();
    if !ctx.dry_run {
        fs::create_dir_all(&deps)?;
    }

    ctx.run(&clone_invocation(dep.url).cwd(deps))?;
    Ok(CloneOutcome::FreshlyCloned)
}
