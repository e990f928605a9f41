//! Status command implementation.
//!
//! The `ardent status` command reports the shell, missing packages and the
//! state of every checkout. It never installs, clones or builds anything.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::config::{required_packages, Settings, DEPENDENCIES};
use crate::environment::check_shell_with;
use crate::error::Result;
use crate::fetch::{checkout_state, CheckoutState};
use crate::packages::{missing_packages, parse_installed, query_invocation};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Report status using an explicit runner and environment lookup.
    pub fn report_with<F>(
        &self,
        ui: &mut dyn UserInterface,
        runner: &mut dyn CommandRunner,
        lookup: F,
    ) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Settings::load(&self.project_root, self.config_path.as_deref())?;

        match check_shell_with(&settings.shell, lookup) {
            Ok(()) => ui.success(&format!(
                "Shell: {}={}",
                settings.shell.variable, settings.shell.expected
            )),
            Err(e) => ui.warning(&e.to_string()),
        }

        if !self.args.offline {
            report_packages(ui, runner);
        }

        let deps_dir = settings.deps_path(&self.project_root);
        ui.message(&format!("Checkouts in {}:", deps_dir.display()));
        for dep in DEPENDENCIES {
            let line = match checkout_state(&deps_dir, dep) {
                CheckoutState::Missing => "missing".to_string(),
                CheckoutState::Fetched(marker) => format!(
                    "fetched {}",
                    marker.fetched_at.format("%Y-%m-%d %H:%M UTC")
                ),
                CheckoutState::Unverified => "present, not verified".to_string(),
            };
            ui.message(&format!("  {}: {}", dep.dir_name(), line));
        }

        Ok(())
    }
}

// pacman may be absent outside MSYS2; that is reported, not fatal.
fn report_packages(ui: &mut dyn UserInterface, runner: &mut dyn CommandRunner) {
    match runner.execute(&query_invocation()) {
        Ok(result) if result.success => {
            let required = required_packages();
            let missing = missing_packages(&required, &parse_installed(&result.stdout));
            if missing.is_empty() {
                ui.success(&format!("Packages: all {} installed", required.len()));
            } else {
                ui.warning(&format!(
                    "Packages: {} of {} missing",
                    missing.len(),
                    required.len()
                ));
                for package in &missing {
                    ui.message(&format!("  {package}"));
                }
            }
        }
        Ok(_) => ui.warning("Packages: pacman -Qq failed"),
        Err(e) => {
            tracing::debug!("Package query failed: {}", e);
            ui.warning("Packages: pacman not available");
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.report_with(ui, &mut SystemRunner, |key| std::env::var(key).ok())?;
        Ok(CommandResult::success())
    }
}
