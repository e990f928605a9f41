//! meson builds.

use std::path::Path;

use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// Build directory created by `meson setup`, relative to the source tree.
pub const BUILD_DIR: &str = "build";

/// Set up (once), configure, compile and install the meson project in `cwd`.
///
/// Setup is skipped when the build directory already exists; the other
/// three steps always run, from inside the build directory.
pub fn meson(ctx: &mut RunContext<'_>, cwd: &Path, options: &[&str]) -> Result<()> {
    let build = cwd.join(BUILD_DIR);

    if build.is_dir() {
        tracing::debug!("{} exists, skipping meson setup", build.display());
    } else {
        ctx.run(&Invocation::new(["meson", "setup", BUILD_DIR]).cwd(cwd))?;
    }

    let mut configure = vec!["meson", "configure"];
    configure.extend_from_slice(options);
    ctx.run(&Invocation::new(configure).cwd(&build))?;
    ctx.run(&Invocation::new(["meson", "compile"]).cwd(&build))?;
    ctx.run(&Invocation::new(["meson", "install"]).cwd(&build))?;
    Ok(())
}
