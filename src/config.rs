//! Scanner configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the content
//! root. All settings have stock defaults; user files are sparse overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_route = "/content"        # URL prefix for local media refs
//! thumbnails_route = "/thumbnails"  # URL prefix for generated video thumbnails
//!
//! [video]
//! extensions = ["mp4", "webm", "mov", "avi"]
//! promo_keywords = ["promo", "trailer", "teaser"]
//! shorts_keywords = ["short", "reel", "tiktok", "story", "vertical"]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the shorts keywords
//! [video]
//! shorts_keywords = ["short", "reel", "vertical", "hochformat"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Scanner configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// URL prefix under which the content tree is served.
    pub content_route: String,
    /// URL prefix under which generated video thumbnails are served.
    pub thumbnails_route: String,
    /// Video detection and sub-categorization settings.
    pub video: VideoConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            content_route: "/content".to_string(),
            thumbnails_route: "/thumbnails".to_string(),
            video: VideoConfig::default(),
        }
    }
}

/// Video detection and sub-categorization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    /// File extensions that mark a project as a video project.
    pub extensions: Vec<String>,
    /// Folder-name keywords classifying a video as a promo.
    pub promo_keywords: Vec<String>,
    /// Folder-name keywords classifying a video as a short.
    pub shorts_keywords: Vec<String>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["mp4", "webm", "mov", "avi"]
                .into_iter()
                .map(String::from)
                .collect(),
            promo_keywords: vec!["promo", "trailer", "teaser"]
                .into_iter()
                .map(String::from)
                .collect(),
            shorts_keywords: vec!["short", "reel", "tiktok", "story", "vertical"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl VideoConfig {
    /// Whether a relative file path carries one of the video extensions.
    /// Comparison is case-insensitive.
    pub fn matches_extension(&self, rel_path: &str) -> bool {
        let Some(ext) = Path::new(rel_path).extension() else {
            return false;
        };
        let ext = ext.to_string_lossy().to_lowercase();
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

impl ScanConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, route) in [
            ("content_route", &self.content_route),
            ("thumbnails_route", &self.thumbnails_route),
        ] {
            if !route.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{key} must start with '/'"
                )));
            }
            if route.len() > 1 && route.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{key} must not end with '/'"
                )));
            }
        }
        if self.video.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "video.extensions must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no config file exists. Unknown keys are
/// rejected and the result is validated.
pub fn load_config(root: &Path) -> Result<ScanConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(ScanConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ScanConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Scan Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file at the content root.
# Unknown keys will cause an error.

# URL prefix under which the content tree is served.
content_route = "/content"

# URL prefix under which generated video thumbnails are served.
thumbnails_route = "/thumbnails"

# ---------------------------------------------------------------------------
# Video detection and sub-categorization
# ---------------------------------------------------------------------------
[video]
# File extensions that mark a project folder as a video project.
extensions = ["mp4", "webm", "mov", "avi"]

# Folder-name keywords (case-insensitive substrings) that classify a video
# as a promo. Checked before the shorts keywords; first hit wins.
promo_keywords = ["promo", "trailer", "teaser"]

# Folder-name keywords that classify a video as a short. Anything matching
# neither list falls into the longform bucket.
shorts_keywords = ["short", "reel", "tiktok", "story", "vertical"]
"##
}
