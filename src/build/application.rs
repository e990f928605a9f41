//! The application build.

use std::collections::BTreeMap;

use super::recipe::{ApplicationBuild, WafOptions};
use super::waf::waf;
use crate::error::Result;
use crate::workflow::RunContext;

/// Separator between entries of a search-path variable.
pub const SEARCH_PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Append `entry` to a search-path value. Unset or empty stays just `entry`.
pub fn append_search_path(current: Option<&str>, entry: &str) -> String {
    match current {
        Some(current) if !current.is_empty() => {
            format!("{current}{SEARCH_PATH_SEPARATOR}{entry}")
        }
        _ => entry.to_string(),
    }
}

/// Environment overrides for the application build.
pub fn application_env(
    app: &ApplicationBuild,
    current: Option<&str>,
    pkg_config_dir: &str,
) -> BTreeMap<String, String> {
    BTreeMap::from([(
        app.search_path_var.to_string(),
        append_search_path(current, pkg_config_dir),
    )])
}

/// Build the application with its extended waf options.
pub fn build_application(ctx: &mut RunContext<'_>, app: &ApplicationBuild) -> Result<()> {
    ctx.ui.status(&format!("Building {}...", app.name));

    let current = std::env::var(app.search_path_var).ok();
    let env = application_env(app, current.as_deref(), &ctx.settings.pkg_config_dir);
    let extra = app.extra_args(&ctx.settings.prefix);
    let opts = WafOptions {
        script: "waf",
        compiler_checks: app.compiler_checks,
        extra: &[],
    };

    let cwd = ctx.checkout_path(app.dir);
    waf(ctx, &cwd, &opts, &extra, env)?;

    tracing::info!("Built {}", app.name);
    Ok(())
}
