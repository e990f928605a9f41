//! List command implementation.
//!
//! The `ardent list` command prints what a run would install, fetch and
//! build, without touching anything.

use crate::cli::args::ListArgs;
use crate::config::{required_packages, APPLICATION, DEPENDENCIES, LIBRARY_BUILDS};
use crate::error::Result;
use crate::ui::{ArdentTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = ArdentTheme::detect();
        let packages = required_packages();

        ui.message(&format!("Packages ({}):", packages.len()));
        for package in &packages {
            ui.message(&format!("  {package}"));
        }

        if self.args.packages {
            return Ok(CommandResult::success());
        }

        ui.message("");
        ui.message("Repositories:");
        for dep in DEPENDENCIES {
            ui.message(&format!(
                "  {} {}",
                dep.dir_name(),
                theme.dim.apply_to(dep.url)
            ));
            for patch in dep.patches {
                ui.message(&format!("    patch {patch}"));
            }
        }

        ui.message("");
        ui.message("Build order:");
        for (i, build) in LIBRARY_BUILDS.iter().enumerate() {
            ui.message(&format!(
                "  {}. {} {}",
                i + 1,
                build.dir,
                theme.dim.apply_to(format!("({})", build.recipe.tool()))
            ));
        }
        ui.message(&format!(
            "  {}. {} {}",
            LIBRARY_BUILDS.len() + 1,
            APPLICATION.dir,
            theme.dim.apply_to("(waf)")
        ));

        Ok(CommandResult::success())
    }
}
