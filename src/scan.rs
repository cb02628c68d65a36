//! Filesystem scanning and manifest generation.
//!
//! The single stage of the folio-scan pipeline: walks the content tree,
//! classifies every project folder, normalizes its media into a
//! [`ProjectRecord`], and aggregates all records into one [`Manifest`].
//!
//! ## Directory Structure
//!
//! The content root is a two-level tree — category folders containing
//! project folders:
//!
//! ```text
//! public/content/                    # Content root
//! ├── config.toml                    # Scanner configuration (optional)
//! ├── restores/
//! │   └── Family-Photo-1952/
//! │       ├── before.jpg             # Before/after pair → restoration
//! │       ├── after.jpg
//! │       ├── info.yml               # Sidecar metadata (optional)
//! │       └── timeline/              # Numbered process steps (optional)
//! │           ├── 1_intake.jpg
//! │           └── 2_retouching.jpg
//! ├── portraits/
//! │   └── Studio-Session/
//! │       ├── sources/               # Sources + finals → portrait or edit,
//! │       │   └── raw-01.jpg         # depending on the parent folder name
//! │       └── final/
//! │           └── session-01.jpg
//! ├── edits/
//! │   └── Band-Poster/
//! │       ├── sources/
//! │       └── final/
//! └── videos/
//!     ├── Summer-Promo/
//!     │   └── final.url              # External link to the published video
//!     └── Wedding-Full-Edit/
//!         └── ceremony.mp4           # Local video file
//! ```
//!
//! ## Processing Model
//!
//! Each second-level directory is one independent unit. Units are processed
//! in parallel (each only reads its own subtree); results are collected in
//! enumeration order, so output stays deterministic. A unit that fails is
//! recorded as a warning and skipped — one broken folder never aborts the
//! scan. The collection is sorted newest-first by directory mtime and
//! serialized in a single write.

use crate::classify;
use crate::config::{self, ScanConfig};
use crate::media::{self, ProjectPaths};
use crate::sidecar;
use crate::timeline;
use crate::types::{
    Category, EditMedia, FinalMedia, Manifest, MediaRef, Payload, ProjectRecord, RestoreMedia,
    VideoCategory, VideoMedia,
};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Image extensions recognized as explicit video thumbnails.
const THUMBNAIL_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A unit-local recoverable problem: the affected field or project is
/// dropped, the scan continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    /// `{category folder}/{project folder}` the warning belongs to.
    pub path: String,
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Everything one scan pass produced: the manifest plus the warnings
/// accumulated while building it.
#[derive(Debug)]
pub struct ScanReport {
    pub manifest: Manifest,
    pub warnings: Vec<ScanWarning>,
}

/// Filesystem locations resolved from the CLI.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Content root to walk.
    pub source: PathBuf,
    /// Directory holding generated video thumbnails (existence checks only).
    pub thumbnails_dir: PathBuf,
}

/// Run one full scan pass over the content root.
///
/// A missing content root is not an error: the result is an empty manifest,
/// matching the "zero projects" case downstream consumers already handle.
pub fn scan(opts: &ScanOptions) -> Result<ScanReport, ScanError> {
    if !opts.source.is_dir() {
        return Ok(ScanReport {
            manifest: Manifest { projects: vec![] },
            warnings: vec![],
        });
    }

    let config = config::load_config(&opts.source)?;
    let units = collect_units(&opts.source)?;

    // Units only read their own subtree, so the fan-out is safe; collect
    // preserves enumeration order, which keeps equal-mtime ordering stable.
    let results: Vec<_> = units
        .par_iter()
        .map(|unit| process_project(unit, &config, opts))
        .collect();

    let mut projects = Vec::new();
    let mut warnings = Vec::new();
    for (unit, result) in units.iter().zip(results) {
        match result {
            Ok((record, unit_warnings)) => {
                projects.push(record);
                warnings.extend(unit_warnings);
            }
            Err(err) => warnings.push(ScanWarning::new(unit.source_dir(), err.to_string())),
        }
    }

    sort_newest_first(&mut projects);

    Ok(ScanReport {
        manifest: Manifest { projects },
        warnings,
    })
}

/// Sort records newest-first by directory mtime. The sort is stable, so
/// equal mtimes keep enumeration order.
fn sort_newest_first(projects: &mut [ProjectRecord]) {
    projects.sort_by(|a, b| b.mod_time.cmp(&a.mod_time));
}

/// Enumerate every `category/project` directory pair under the root.
/// Hidden entries are skipped at both levels.
fn collect_units(root: &Path) -> Result<Vec<ProjectPaths>, ScanError> {
    let mut units = Vec::new();
    for category_dir in sorted_subdirs(root)? {
        let category_name = dir_name(&category_dir);
        for project_dir in sorted_subdirs(&category_dir)? {
            units.push(ProjectPaths {
                name: dir_name(&project_dir),
                dir: project_dir,
                category_dir: category_name.clone(),
            });
        }
    }
    Ok(units)
}

fn sorted_subdirs(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .filter(|p| !dir_name(p).starts_with('.'))
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Recursive relative file listing of one project folder, sorted, with
/// separators normalized to forward slashes. Hidden entries are skipped.
fn list_files(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        // min_depth(1) guarantees the prefix strips cleanly
        if let Ok(rel) = entry.path().strip_prefix(dir) {
            files.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    files.sort();
    Ok(files)
}

/// Process one project unit into a record plus any warnings it produced.
fn process_project(
    unit: &ProjectPaths,
    config: &ScanConfig,
    opts: &ScanOptions,
) -> Result<(ProjectRecord, Vec<ScanWarning>), ScanError> {
    let mut warnings = Vec::new();

    let files = list_files(&unit.dir)?;
    let category = classify::classify(&files, &unit.category_dir, &config.video);
    let mod_time = fs::metadata(&unit.dir)?.modified()?;

    let info = match sidecar::load(&unit.dir) {
        Ok(info) => info,
        Err(err) => {
            warnings.push(ScanWarning::new(
                unit.source_dir(),
                format!("{}: {err}", sidecar::SIDECAR_FILENAME),
            ));
            None
        }
    };

    let (payload, cover, video_category) = match category {
        Category::Restores => {
            let (payload, cover) = extract_restore(unit, &files, config, &mut warnings);
            (payload, cover, None)
        }
        Category::Edits | Category::Portraits => {
            let (payload, cover) =
                extract_edit(unit, &files, config, category == Category::Portraits, &mut warnings);
            (payload, cover, None)
        }
        Category::Videos => extract_video(unit, &files, info.as_ref(), config, opts, &mut warnings),
        Category::Unknown => (None, None, None),
    };

    let timeline = timeline::extract(unit, &config.content_route, &mut warnings)?;

    let record = ProjectRecord {
        slug: format!("{}-{}", category.as_str(), unit.name.to_lowercase()),
        category,
        title: unit.name.clone(),
        cover,
        info,
        payload,
        timeline,
        video_category,
        source_dir: unit.source_dir(),
        mod_time,
    };
    Ok((record, warnings))
}

/// Resolve a relative path into a media ref, downgrading failures
/// (unreadable `.url` marker) to warnings.
fn try_media(
    unit: &ProjectPaths,
    config: &ScanConfig,
    rel_path: &str,
    warnings: &mut Vec<ScanWarning>,
) -> Option<MediaRef> {
    match media::media_ref(unit, &config.content_route, rel_path) {
        Ok(media) => Some(media),
        Err(err) => {
            warnings.push(ScanWarning::new(
                unit.source_dir(),
                format!("{rel_path}: {err}"),
            ));
            None
        }
    }
}

/// First top-level file whose name starts with the given prefix.
fn first_top_level<'a>(files: &'a [String], prefix: &str) -> Option<&'a str> {
    files
        .iter()
        .map(String::as_str)
        .find(|f| !f.contains('/') && f.starts_with(prefix))
}

/// Direct children of a subfolder, in listing order.
fn direct_children<'a>(files: &'a [String], folder: &str) -> Vec<&'a str> {
    let prefix = format!("{folder}/");
    files
        .iter()
        .map(String::as_str)
        .filter(|f| f.starts_with(&prefix) && !f[prefix.len()..].contains('/'))
        .collect()
}

fn extract_restore(
    unit: &ProjectPaths,
    files: &[String],
    config: &ScanConfig,
    warnings: &mut Vec<ScanWarning>,
) -> (Option<Payload>, Option<MediaRef>) {
    let (Some(before_rel), Some(after_rel)) = (
        first_top_level(files, "before."),
        first_top_level(files, "after."),
    ) else {
        return (None, None);
    };

    let before = try_media(unit, config, before_rel, warnings);
    let after = try_media(unit, config, after_rel, warnings);
    match (before, after) {
        (Some(before), Some(after)) => {
            // The restored state is the project's face.
            let cover = Some(after.clone());
            (
                Some(Payload::Restore(RestoreMedia { before, after })),
                cover,
            )
        }
        _ => (None, None),
    }
}

fn extract_edit(
    unit: &ProjectPaths,
    files: &[String],
    config: &ScanConfig,
    portrait: bool,
    warnings: &mut Vec<ScanWarning>,
) -> (Option<Payload>, Option<MediaRef>) {
    let source_rels = direct_children(files, "sources");
    let final_rels = direct_children(files, "final");
    if source_rels.is_empty() || final_rels.is_empty() {
        return (None, None);
    }

    let sources: Vec<MediaRef> = source_rels
        .iter()
        .filter_map(|rel| try_media(unit, config, rel, warnings))
        .collect();
    let finals: Vec<MediaRef> = final_rels
        .iter()
        .filter_map(|rel| try_media(unit, config, rel, warnings))
        .collect();

    let Some(r#final) = FinalMedia::from_vec(finals) else {
        return (None, None);
    };
    let cover = Some(r#final.first().clone());
    let edit = EditMedia { sources, r#final };
    let payload = if portrait {
        Payload::Portrait(edit)
    } else {
        Payload::Edit(edit)
    };
    (Some(payload), cover)
}

fn extract_video(
    unit: &ProjectPaths,
    files: &[String],
    info: Option<&sidecar::ProjectInfo>,
    config: &ScanConfig,
    opts: &ScanOptions,
    warnings: &mut Vec<ScanWarning>,
) -> (Option<Payload>, Option<MediaRef>, Option<VideoCategory>) {
    let video_category = info
        .and_then(|i| i.video_category)
        .unwrap_or_else(|| classify::video_category_for(&unit.name, &config.video));

    // Final resolution order: url marker, then a `final.*` file, then the
    // first file carrying a video extension.
    let final_ref = files
        .iter()
        .any(|f| f == classify::URL_MARKER)
        .then(|| try_media(unit, config, classify::URL_MARKER, warnings))
        .flatten()
        .or_else(|| {
            first_top_level(files, "final.")
                .filter(|rel| !rel.ends_with(media::URL_MARKER_EXT))
                .and_then(|rel| try_media(unit, config, rel, warnings))
        })
        .or_else(|| {
            files
                .iter()
                .map(String::as_str)
                .find(|f| !f.contains('/') && config.video.matches_extension(f))
                .and_then(|rel| try_media(unit, config, rel, warnings))
        });

    let Some(final_ref) = final_ref else {
        return (None, None, Some(video_category));
    };

    let cover = explicit_thumbnail(unit, files, config)
        .or_else(|| match &final_ref {
            MediaRef::Url { href } => media::youtube_thumbnail(href).map(MediaRef::url),
            MediaRef::File { .. } => None,
        })
        .or_else(|| generated_thumbnail(unit, config, opts))
        .or_else(|| final_ref.is_file().then(|| final_ref.clone()));

    (
        Some(Payload::Video(VideoMedia {
            r#final: final_ref,
        })),
        cover,
        Some(video_category),
    )
}

/// A custom thumbnail image placed at the project's top level.
fn explicit_thumbnail(
    unit: &ProjectPaths,
    files: &[String],
    config: &ScanConfig,
) -> Option<MediaRef> {
    let rel = files.iter().map(String::as_str).find(|f| {
        !f.contains('/')
            && Path::new(f)
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    THUMBNAIL_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
    })?;
    Some(MediaRef::file(unit.servable(&config.content_route, rel)))
}

/// A previously generated `{project}.jpg` in the thumbnails directory.
/// Existence check only — the scanner never creates thumbnails.
fn generated_thumbnail(
    unit: &ProjectPaths,
    config: &ScanConfig,
    opts: &ScanOptions,
) -> Option<MediaRef> {
    let filename = format!("{}.jpg", unit.name);
    opts.thumbnails_dir
        .join(&filename)
        .is_file()
        .then(|| MediaRef::file(format!("{}/{}", config.thumbnails_route, filename)))
}
