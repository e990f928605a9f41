//! waf builds.

use std::collections::BTreeMap;
use std::path::Path;

use super::recipe::WafOptions;
use crate::error::Result;
use crate::shell::Invocation;
use crate::workflow::RunContext;

/// `python3 <script> configure build install --prefix=<prefix> …`.
///
/// Compiler checks come first, then `opts.extra`, then `extra`.
pub fn waf_invocation(opts: &WafOptions, prefix: &str, extra: &[String]) -> Invocation {
    let mut argv: Vec<String> = ["python3", opts.script, "configure", "build", "install"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    argv.push(format!("--prefix={prefix}"));
    argv.extend(opts.compiler_checks.iter().map(|c| c.flag().to_string()));
    argv.extend(opts.extra.iter().map(|s| s.to_string()));
    argv.extend(extra.iter().cloned());
    Invocation::new(argv)
}

/// Configure, build and install with waf in `cwd`.
///
/// `env` is merged over the inherited environment.
pub fn waf(
    ctx: &mut RunContext<'_>,
    cwd: &Path,
    opts: &WafOptions,
    extra: &[String],
    env: BTreeMap<String, String>,
) -> Result<()> {
    let prefix = ctx.settings.prefix.clone();
    let invocation = waf_invocation(opts, &prefix, extra).cwd(cwd).envs(env);
    ctx.run(&invocation)?;
    Ok(())
}
