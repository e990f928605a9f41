//! Fetch completion markers.
//!
//! A checkout directory alone does not tell a complete fetch from one that
//! died halfway through cloning or patching. After the clone and every
//! patch succeed, a small YAML record is written to
//! `<deps>/.ardent/<name>.yml`. Markers live outside the checkout so the
//! git tree stays clean.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Dependency;
use crate::error::{ArdentError, Result};

/// Directory under the deps directory holding markers.
pub const MARKER_DIR: &str = ".ardent";

/// Record of a completed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMarker {
    /// URL the checkout was cloned from.
    pub url: String,
    /// Patches applied after cloning, in order.
    #[serde(default)]
    pub patches: Vec<String>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl FetchMarker {
    /// A marker for `dep`, stamped now.
    pub fn for_dependency(dep: &Dependency) -> Self {
        Self {
            url: dep.url.to_string(),
            patches: dep.patches.iter().map(|p| p.to_string()).collect(),
            fetched_at: Utc::now(),
        }
    }
}

/// Where the marker for `dir_name` lives.
pub fn marker_path(deps_dir: &Path, dir_name: &str) -> PathBuf {
    deps_dir.join(MARKER_DIR).join(format!("{dir_name}.yml"))
}

/// Write the marker for `dep`.
pub fn write_marker(deps_dir: &Path, dep: &Dependency) -> Result<FetchMarker> {
    let path = marker_path(deps_dir, dep.dir_name());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let marker = FetchMarker::for_dependency(dep);
    let yaml = serde_yaml::to_string(&marker).map_err(|e| ArdentError::ConfigParseError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&path, yaml)?;

    tracing::debug!("Wrote fetch marker {}", path.display());
    Ok(marker)
}

/// Read the marker for `dir_name`, if there is one.
pub fn read_marker(deps_dir: &Path, dir_name: &str) -> Result<Option<FetchMarker>> {
    let path = marker_path(deps_dir, dir_name);
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| ArdentError::ConfigParseError {
            path,
            message: e.to_string(),
        })
}
