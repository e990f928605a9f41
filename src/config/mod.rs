//! Build manifest and run-time settings.
//!
//! - [`manifest`] - what gets installed, fetched and built (compiled in)
//! - [`settings`] - where things live on this machine (defaults + `ardent.yml`)

pub mod manifest;
pub mod settings;

pub use manifest::{
    dependency, required_packages, Dependency, APPLICATION, DEPENDENCIES, LIBRARY_BUILDS,
};
pub use settings::{Settings, ShellMarker, SETTINGS_FILE};
