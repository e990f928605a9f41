//! Run command implementation.
//!
//! The `ardent run` command drives the whole pipeline. It is also what a
//! bare `ardent` invocation does.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::shell::{CommandRunner, DryRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::workflow::{self, RunContext, RunSummary};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Run the pipeline with an explicit runner and environment lookup.
    pub fn run_with<F>(
        &self,
        ui: &mut dyn UserInterface,
        runner: &mut dyn CommandRunner,
        lookup: F,
    ) -> Result<RunSummary>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Settings::load(&self.project_root, self.config_path.as_deref())?;
        let selection = self.args.selection();

        ui.show_header("Ardent");
        if self.args.dry_run {
            ui.warning("Dry run: commands are echoed but not executed.");
        }
        tracing::debug!("Selected stages: {:?}", selection.stages());

        let mut ctx = RunContext::new(&self.project_root, &settings, runner, ui)
            .with_dry_run(self.args.dry_run);
        let summary = workflow::run_with_env(&mut ctx, &selection, lookup)?;

        report(ui, &summary);
        Ok(summary)
    }
}

fn report(ui: &mut dyn UserInterface, summary: &RunSummary) {
    if summary.stages_run.is_empty() {
        ui.warning("No stages selected; nothing was run.");
        return;
    }

    let stages: Vec<_> = summary.stages_run.iter().map(|s| s.name()).collect();
    ui.success(&format!(
        "Finished {} ({} cloned, {} patches applied)",
        stages.join(", "),
        summary.clone_count(),
        summary.patch_count()
    ));
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut runner: Box<dyn CommandRunner> = if self.args.dry_run {
            Box::new(DryRunner)
        } else {
            Box::new(SystemRunner)
        };
        self.run_with(ui, runner.as_mut(), |key| std::env::var(key).ok())?;
        Ok(CommandResult::success())
    }
}
