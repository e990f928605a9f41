//! Applying source patches to fresh checkouts.

use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// Path-stripping level. Patch files name paths relative to the project
/// root (`deps/<name>/…`).
pub const STRIP_LEVEL: &str = "-p0";

/// `patch -i <patch file> -p0`.
pub fn patch_invocation(patch_file: &str) -> Invocation {
    Invocation::new(["patch", "-i", patch_file, STRIP_LEVEL])
}

/// Apply one named patch from the patches directory, from the project root.
pub fn apply_patch(ctx: &mut RunContext<'_>, patch_name: &str) -> Result<()> {
    let patch_file = ctx.settings.patch_arg(patch_name);
    let invocation = patch_invocation(&patch_file).cwd(ctx.project_root);
    ctx.run(&invocation)?;
    Ok(())
}
