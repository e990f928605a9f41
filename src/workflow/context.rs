//! Shared state threaded through every stage.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::Result;
use crate::shell::{run_checked, CommandResult, CommandRunner, Invocation};
use crate::ui::UserInterface;

/// Everything a stage needs: where it runs, how it runs commands and where
/// it reports.
pub struct RunContext<'a> {
    /// Project root; relative settings paths resolve against it.
    pub project_root: &'a Path,
    /// Run-time settings.
    pub settings: &'a Settings,
    /// Executes external commands.
    pub runner: &'a mut dyn CommandRunner,
    /// Console output.
    pub ui: &'a mut dyn UserInterface,
    /// Commands are only echoed; nothing on disk is written either.
    pub dry_run: bool,
}

impl<'a> RunContext<'a> {
    /// Create a context.
    pub fn new(
        project_root: &'a Path,
        settings: &'a Settings,
        runner: &'a mut dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            project_root,
            settings,
            runner,
            ui,
            dry_run: false,
        }
    }

    /// Mark this context as a dry run.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run a command through [`run_checked`].
    pub fn run(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        run_checked(&mut *self.runner, &mut *self.ui, invocation)
    }

    /// Absolute deps directory.
    pub fn deps_path(&self) -> PathBuf {
        self.settings.deps_path(self.project_root)
    }

    /// Absolute checkout directory of a dependency.
    pub fn checkout_path(&self, dir_name: &str) -> PathBuf {
        self.settings.checkout_path(self.project_root, dir_name)
    }
}
