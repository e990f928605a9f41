//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::workflow::{Stage, StageSelection};

/// Ardent - Build Ardour and its dependencies on Windows (MSYS2 MINGW64).
#[derive(Debug, Parser)]
#[command(name = "ardent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default ardent.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only echo commands, warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install packages, fetch, and build everything (default if no command specified)
    Run(RunArgs),

    /// Show the packages, repositories and build order
    List(ListArgs),

    /// Show shell, package and checkout state
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Echo commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Run only these stages (comma-separated)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub only: Vec<Stage>,

    /// Skip the package installation stage
    #[arg(long)]
    pub skip_packages: bool,

    /// Skip the fetch stage
    #[arg(long)]
    pub skip_fetch: bool,
}

impl RunArgs {
    /// Stage selection described by these arguments.
    pub fn selection(&self) -> StageSelection {
        let mut selection = StageSelection::only(&self.only);
        if self.skip_packages {
            selection = selection.without(Stage::Packages);
        }
        if self.skip_fetch {
            selection = selection.without(Stage::Fetch);
        }
        selection
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List required packages only
    #[arg(long)]
    pub packages: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Do not query pacman for installed packages
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
