//! Run-time settings.
//!
//! Paths and a handful of values that depend on the machine rather than
//! on what is being built. Defaults match a stock MSYS2 install; an
//! optional `ardent.yml` in the project root overrides any subset.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArdentError, Result};

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "ardent.yml";

/// Environment variable and value identifying the required shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellMarker {
    /// Variable to read.
    pub variable: String,
    /// Value it must hold.
    pub expected: String,
}

impl Default for ShellMarker {
    fn default() -> Self {
        Self {
            variable: "MSYSTEM".to_string(),
            expected: "MINGW64".to_string(),
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory dependencies are cloned into, relative to the project root.
    pub deps_dir: PathBuf,

    /// Directory holding patch files, relative to the project root.
    pub patches_dir: PathBuf,

    /// Installation prefix passed to waf.
    pub prefix: String,

    /// pkg-config directory appended to the application's search path.
    pub pkg_config_dir: String,

    /// `ACLOCAL_PATH` used for autotools bootstraps.
    pub aclocal_path: String,

    /// Shell check.
    pub shell: ShellMarker,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deps_dir: PathBuf::from("deps"),
            patches_dir: PathBuf::from("patches"),
            prefix: "/mingw64".to_string(),
            pkg_config_dir: r"C:\mingw64\lib\pkgconfig".to_string(),
            aclocal_path: "/usr/share/aclocal".to_string(),
            shell: ShellMarker::default(),
        }
    }
}

impl Settings {
    /// Load settings for a project.
    ///
    /// An explicit `path` must exist. Without one, `ardent.yml` in
    /// `project_root` is used when present and defaults otherwise.
    pub fn load(project_root: &Path, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = project_root.join(SETTINGS_FILE);
                if !candidate.is_file() {
                    tracing::debug!("No {} found, using defaults", SETTINGS_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::parse(&content, &path)
    }

    /// Parse settings from YAML. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ArdentError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Absolute deps directory for `project_root`.
    pub fn deps_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.deps_dir)
    }

    /// Checkout directory of a dependency.
    pub fn checkout_path(&self, project_root: &Path, dir_name: &str) -> PathBuf {
        self.deps_path(project_root).join(dir_name)
    }

    /// Patch file argument, as given to `patch -i` from the project root.
    ///
    /// Always uses forward slashes, which both MSYS2 tools and Windows accept.
    pub fn patch_arg(&self, patch_name: &str) -> String {
        let dir = self.patches_dir.to_string_lossy().replace('\\', "/");
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            patch_name.to_string()
        } else {
            format!("{dir}/{patch_name}")
        }
    }
}
