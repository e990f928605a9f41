//! The build pipeline.
//!
//! A run is a straight line: shell guard, packages, fetch, libraries,
//! application. Any error stops the run where it happened. Stages can be
//! left out with a [`StageSelection`], but the guard always runs and the
//! remaining stages keep their order.

pub mod context;

pub use context::RunContext;

use std::fmt;
use std::time::Instant;

use crate::build::{build_application, build_libraries};
use crate::config::{required_packages, APPLICATION, DEPENDENCIES, LIBRARY_BUILDS};
use crate::environment::check_shell_with;
use crate::error::Result;
use crate::fetch::{fetch_all, FetchReport};
use crate::packages::{install_missing, InstallOutcome};

/// A pipeline stage after the shell guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Stage {
    /// Install missing system packages.
    Packages,
    /// Clone and patch dependencies.
    Fetch,
    /// Build the dependency libraries.
    Libraries,
    /// Build the application.
    Application,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Packages,
        Stage::Fetch,
        Stage::Libraries,
        Stage::Application,
    ];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Packages => "packages",
            Self::Fetch => "fetch",
            Self::Libraries => "libraries",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which stages a run executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSelection {
    enabled: [bool; 4],
}

impl Default for StageSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl StageSelection {
    /// Every stage.
    pub fn all() -> Self {
        Self {
            enabled: [true; 4],
        }
    }

    /// Only the given stages. An empty list means every stage.
    pub fn only(stages: &[Stage]) -> Self {
        if stages.is_empty() {
            return Self::all();
        }
        let mut selection = Self {
            enabled: [false; 4],
        };
        for stage in stages {
            selection.enabled[Self::index(*stage)] = true;
        }
        selection
    }

    /// Drop one stage.
    pub fn without(mut self, stage: Stage) -> Self {
        self.enabled[Self::index(stage)] = false;
        self
    }

    /// Whether `stage` runs.
    pub fn includes(&self, stage: Stage) -> bool {
        self.enabled[Self::index(stage)]
    }

    /// Selected stages in execution order.
    pub fn stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|s| self.includes(*s))
            .collect()
    }

    fn index(stage: Stage) -> usize {
        match stage {
            Stage::Packages => 0,
            Stage::Fetch => 1,
            Stage::Libraries => 2,
            Stage::Application => 3,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Stages executed, in order.
    pub stages_run: Vec<Stage>,
    /// Package stage result, if it ran.
    pub packages: Option<InstallOutcome>,
    /// Fetch reports, if the fetch stage ran.
    pub fetched: Vec<FetchReport>,
}

impl RunSummary {
    /// Number of dependencies cloned during this run.
    pub fn clone_count(&self) -> usize {
        self.fetched.iter().filter(|r| r.outcome.is_fresh()).count()
    }

    /// Number of patches applied during this run.
    pub fn patch_count(&self) -> usize {
        self.fetched.iter().map(|r| r.patches_applied.len()).sum()
    }
}

/// Run the pipeline against the process environment.
pub fn run(ctx: &mut RunContext<'_>, selection: &StageSelection) -> Result<RunSummary> {
    run_with_env(ctx, selection, |key| std::env::var(key).ok())
}

/// Run the pipeline, reading the shell marker through `lookup`.
pub fn run_with_env<F>(
    ctx: &mut RunContext<'_>,
    selection: &StageSelection,
    lookup: F,
) -> Result<RunSummary>
where
    F: Fn(&str) -> Option<String>,
{
    let start = Instant::now();
    check_shell_with(&ctx.settings.shell, lookup)?;

    let mut summary = RunSummary::default();

    for stage in selection.stages() {
        tracing::info!("Stage: {}", stage);
        match stage {
            Stage::Packages => {
                let outcome = install_missing(ctx, &required_packages())?;
                summary.packages = Some(outcome);
            }
            Stage::Fetch => {
                summary.fetched = fetch_all(ctx, DEPENDENCIES)?;
            }
            Stage::Libraries => build_libraries(ctx, LIBRARY_BUILDS)?,
            Stage::Application => build_application(ctx, &APPLICATION)?,
        }
        summary.stages_run.push(stage);
    }

    tracing::info!(
        clones = summary.clone_count(),
        patches = summary.patch_count(),
        "Run finished in {:.1}s",
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::ArdentError;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn mingw64(key: &str) -> Option<String> {
        (key == "MSYSTEM").then(|| "MINGW64".to_string())
    }

    #[test]
    fn stage_names() {
        let names: Vec<_> = Stage::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["packages", "fetch", "libraries", "application"]);
    }

    #[test]
    fn selection_only_keeps_execution_order() {
        let selection = StageSelection::only(&[Stage::Application, Stage::Fetch]);
        assert_eq!(selection.stages(), [Stage::Fetch, Stage::Application]);
    }

    #[test]
    fn selection_only_empty_is_all() {
        assert_eq!(StageSelection::only(&[]), StageSelection::all());
    }

    #[test]
    fn selection_without_drops_stage() {
        let selection = StageSelection::all().without(Stage::Packages);
        assert!(!selection.includes(Stage::Packages));
        assert_eq!(
            selection.stages(),
            [Stage::Fetch, Stage::Libraries, Stage::Application]
        );
    }

    #[test]
    fn wrong_shell_has_no_side_effects() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let result = {
            let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
            run_with_env(&mut ctx, &StageSelection::all(), |_| Some("MSYS".to_string()))
        };

        assert!(matches!(result, Err(ArdentError::WrongShell { .. })));
        assert!(runner.invocations().is_empty());
        assert!(ui.commands().is_empty());
        assert!(!temp.path().join("deps").exists());
    }

    #[test]
    fn guard_runs_even_when_no_stage_selected() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let selection = StageSelection::only(&[Stage::Packages]).without(Stage::Packages);

        let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
        let result = run_with_env(&mut ctx, &selection, |_| None);
        assert!(matches!(result, Err(ArdentError::WrongShell { .. })));
    }

    #[test]
    fn selected_stages_only() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let summary = {
            let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
            run_with_env(&mut ctx, &StageSelection::only(&[Stage::Application]), mingw64)
                .unwrap()
        };

        assert_eq!(summary.stages_run, [Stage::Application]);
        assert_eq!(runner.invocations().len(), 1);
        assert_eq!(runner.invocations()[0].program(), "python3");
    }

    #[test]
    fn failing_stage_stops_the_run() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut runner = RecordingRunner::new();
        runner.fail("git clone", 128);
        let mut ui = MockUI::new();

        let result = {
            let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
            run_with_env(&mut ctx, &StageSelection::all(), mingw64)
        };

        assert!(result.is_err());
        assert!(runner.invocations_of("python3").is_empty());
        assert!(runner.invocations_of("make").is_empty());
    }

    #[test]
    fn summary_counts_clones_and_patches() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("deps").join("jack2")).unwrap();
        let settings = Settings::default();
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let summary = {
            let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
            run_with_env(&mut ctx, &StageSelection::only(&[Stage::Fetch]), mingw64).unwrap()
        };

        assert_eq!(summary.clone_count(), DEPENDENCIES.len() - 1);
        assert_eq!(summary.patch_count(), 7);
    }
}
