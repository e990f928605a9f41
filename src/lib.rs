//! Ardent - Build Ardour and its dependencies on Windows.
//!
//! Ardent turns a fresh MSYS2 MINGW64 shell into an Ardour build: it
//! installs the required system packages through pacman, clones and
//! patches the third-party libraries, builds them in dependency order and
//! finally builds Ardour itself.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The build manifest and run-time settings
//! - [`environment`] - Shell environment guard
//! - [`error`] - Error types and result aliases
//! - [`packages`] - System package installation through pacman
//! - [`fetch`] - Cloning and patching dependency sources
//! - [`build`] - waf, autotools and meson wrappers
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//! - [`workflow`] - The pipeline that ties the stages together
//!
//! # Example
//!
//! ```
//! use ardent::config::{required_packages, DEPENDENCIES};
//!
//! assert!(required_packages().contains("git"));
//! assert_eq!(DEPENDENCIES[0].dir_name(), "jack2");
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod packages;
pub mod shell;
pub mod ui;
pub mod workflow;

pub use error::{ArdentError, Result};
