//! autotools builds: `autogen.sh` then `make install`.

use std::path::Path;

use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// `sh ./autogen.sh` with `ACLOCAL_PATH` set for macro discovery.
pub fn autogen_invocation(aclocal_path: &str) -> Invocation {
    Invocation::new(["sh", "./autogen.sh"]).env("ACLOCAL_PATH", aclocal_path)
}

/// `make install`.
pub fn make_install_invocation() -> Invocation {
    Invocation::new(["make", "install"])
}

/// Bootstrap and install the autotools project in `cwd`.
pub fn autotools(ctx: &mut RunContext<'_>, cwd: &Path) -> Result<()> {
    let aclocal = ctx.settings.aclocal_path.clone();
    ctx.run(&autogen_invocation(&aclocal).cwd(cwd))?;
    ctx.run(&make_install_invocation().cwd(cwd))?;
    Ok(())
}
