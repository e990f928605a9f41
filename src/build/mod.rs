//! Build-system wrappers.
//!
//! Three wrappers cover every dependency: [`waf`], [`autotools`] and
//! [`meson`]. A [`BuildRecipe`] from the manifest picks the wrapper and
//! supplies its options; [`build_library`] does the dispatch.
//!
//! Builds are never skipped. Unlike fetching, every run re-invokes every
//! build tool and leaves incremental work to the tools themselves.

pub mod application;
pub mod autotools;
pub mod meson;
pub mod recipe;
pub mod waf;

pub use application::build_application;
pub use recipe::{ApplicationBuild, BuildRecipe, CompilerCheck, LibraryBuild, WafOptions};

use std::collections::BTreeMap;

use crate::error::Result;
use crate::workflow::RunContext;

/// Build one library according to its recipe.
pub fn build_library(ctx: &mut RunContext<'_>, build: &LibraryBuild) -> Result<()> {
    let cwd = ctx.checkout_path(build.dir);
    tracing::info!("Building {} with {}", build.dir, build.recipe.tool());

    match &build.recipe {
        BuildRecipe::Waf(opts) => waf::waf(ctx, &cwd, opts, &[], BTreeMap::new()),
        BuildRecipe::Autotools => autotools::autotools(ctx, &cwd),
        BuildRecipe::Meson { options } => meson::meson(ctx, &cwd, options),
    }
}

/// Build every library, in order.
pub fn build_libraries(ctx: &mut RunContext<'_>, builds: &[LibraryBuild]) -> Result<()> {
    ctx.ui.status("Building libraries...");
    for build in builds {
        build_library(ctx, build)?;
    }
    Ok(())
}
