//! Sidecar metadata (`info.yml`) loading.
//!
//! A project folder may carry an `info.yml` with human-authored overrides
//! that cannot be derived from the file layout: display title and subtitle,
//! step notes, and a `videoCategory` that short-circuits the name heuristic.
//! Known fields are typed; everything else passes through onto the record
//! untouched, so the presentation layer can grow new keys without touching
//! the scanner.

use crate::types::VideoCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Sidecar descriptor filename inside a project folder.
pub const SIDECAR_FILENAME: &str = "info.yml";

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Per-project descriptor, merged onto the record as its `info` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Free-form step notes shown alongside the timeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// Explicit sub-category; wins over the folder-name heuristic.
    #[serde(rename = "videoCategory", skip_serializing_if = "Option::is_none")]
    pub video_category: Option<VideoCategory>,
    /// Anything else in the file, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Load `info.yml` from a project folder.
///
/// `Ok(None)` when the file is absent — most projects carry none. A present
/// but unreadable or malformed file is an error the caller downgrades to a
/// warning; the record is still emitted with `info` omitted.
pub fn load(project_dir: &Path) -> Result<Option<ProjectInfo>, SidecarError> {
    let path = project_dir.join(SIDECAR_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    let info: ProjectInfo = serde_yaml::from_str(&content)?;
    Ok(Some(info))
}
