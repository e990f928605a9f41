//! Fetching dependency sources.
//!
//! Each dependency is cloned at most once: an existing checkout directory
//! is never touched again. Patches are applied only right after the clone
//! that created the directory, so they are never applied twice.
//!
//! # Interrupted fetches
//!
//! A checkout left behind by a failed clone or patch still exists on the
//! next run and is skipped like any other. To make that visible, a
//! [`marker`] is written once a fetch fully succeeds; a present checkout
//! without one produces a warning telling the user to delete it.

pub mod git;
pub mod marker;
pub mod patch;

pub use git::{clone_if_absent, clone_invocation, CloneOutcome};
pub use marker::{marker_path, read_marker, write_marker, FetchMarker};
pub use patch::{apply_patch, patch_invocation};

use std::path::Path;

use crate::config::Dependency;
use crate::error::Result;
use crate::workflow::RunContext;

/// What happened to one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Checkout directory name.
    pub dir_name: String,
    /// Clone result.
    pub outcome: CloneOutcome,
    /// Patches applied during this run, in order.
    pub patches_applied: Vec<String>,
}

/// State of a checkout on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// No checkout directory.
    Missing,
    /// Checkout present with a completion marker.
    Fetched(FetchMarker),
    /// Checkout present without a readable completion marker.
    Unverified,
}

/// Inspect the checkout of `dep` without changing anything.
pub fn checkout_state(deps_dir: &Path, dep: &Dependency) -> CheckoutState {
    if !deps_dir.join(dep.dir_name()).is_dir() {
        return CheckoutState::Missing;
    }

    match read_marker(deps_dir, dep.dir_name()) {
        Ok(Some(marker)) => CheckoutState::Fetched(marker),
        Ok(None) => CheckoutState::Unverified,
        Err(e) => {
            tracing::debug!("Ignoring unreadable marker for {}: {}", dep.dir_name(), e);
            CheckoutState::Unverified
        }
    }
}

/// Clone `dep` if needed and patch it if this run cloned it.
pub fn fetch_dependency(ctx: &mut RunContext<'_>, dep: &Dependency) -> Result<FetchReport> {
    let outcome = clone_if_absent(ctx, dep)?;
    let mut patches_applied = Vec::new();

    if outcome.is_fresh() {
        for patch_name in dep.patches {
            apply_patch(ctx, patch_name)?;
            patches_applied.push(patch_name.to_string());
        }
        if !ctx.dry_run {
            write_marker(&ctx.deps_path(), dep)?;
        }
        tracing::info!("Fetched {}", dep.dir_name());
    } else if checkout_state(&ctx.deps_path(), dep) == CheckoutState::Unverified {
        let checkout = ctx.checkout_path(dep.dir_name());
        ctx.ui.warning(&format!(
            "{} exists but was not fetched to completion by Ardent; delete it to fetch and patch it again.",
            checkout.display()
        ));
    }

    Ok(FetchReport {
        dir_name: dep.dir_name().to_string(),
        outcome,
        patches_applied,
    })
}

/// Fetch every dependency, in order.
pub fn fetch_all(ctx: &mut RunContext<'_>, deps: &[Dependency]) -> Result<Vec<FetchReport>> {
    ctx.ui.status("Fetching libraries...");
    deps.iter().map(|dep| fetch_dependency(ctx, dep)).collect()
}
