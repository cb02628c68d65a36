//! Shared test utilities for the folio-scan test suite.
//!
//! Builders for synthetic content trees plus lookup helpers over the scan
//! result. Each test gets an isolated temp workspace holding a `content/`
//! tree and a `thumbnails/` directory:
//!
//! ```rust
//! let tmp = workspace();
//! restore_project(&tmp, "Family-Photo");
//! let report = scan(&options(&tmp)).unwrap();
//! let record = find_project(&report.manifest, "restores-family-photo");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::ScanOptions;
use crate::types::{Manifest, ProjectRecord};

// =========================================================================
// Workspace setup
// =========================================================================

/// Fresh temp workspace with empty `content/` and `thumbnails/` dirs.
pub fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();
    fs::create_dir_all(tmp.path().join("thumbnails")).unwrap();
    tmp
}

/// Scan options pointing at the workspace's content and thumbnail dirs.
pub fn options(tmp: &TempDir) -> ScanOptions {
    ScanOptions {
        source: tmp.path().join("content"),
        thumbnails_dir: tmp.path().join("thumbnails"),
    }
}

/// Create (and return) an empty `content/{category}/{name}` project folder.
pub fn project_dir(tmp: &TempDir, category: &str, name: &str) -> PathBuf {
    let dir = tmp.path().join("content").join(category).join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a file under `base`, creating parent directories as needed.
pub fn write_file(base: &Path, rel: &str, contents: &str) {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

// =========================================================================
// Project builders
// =========================================================================

/// A restoration project: `before.jpg` + `after.jpg`.
pub fn restore_project(tmp: &TempDir, name: &str) -> PathBuf {
    let dir = project_dir(tmp, "restores", name);
    write_file(&dir, "before.jpg", "fake image");
    write_file(&dir, "after.jpg", "fake image");
    dir
}

/// An edit/portrait project with the given source and final filenames.
pub fn edit_project(
    tmp: &TempDir,
    category: &str,
    name: &str,
    sources: &[&str],
    finals: &[&str],
) -> PathBuf {
    let dir = project_dir(tmp, category, name);
    for source in sources {
        write_file(&dir, &format!("sources/{source}"), "fake image");
    }
    for fin in finals {
        write_file(&dir, &format!("final/{fin}"), "fake image");
    }
    dir
}

/// A video project published as an external link via `final.url`.
pub fn video_url_project(tmp: &TempDir, name: &str, href: &str) -> PathBuf {
    let dir = project_dir(tmp, "videos", name);
    write_file(&dir, "final.url", &format!("{href}\n"));
    dir
}

/// A video project carrying a local video file.
pub fn video_file_project(tmp: &TempDir, name: &str, filename: &str) -> PathBuf {
    let dir = project_dir(tmp, "videos", name);
    write_file(&dir, filename, "fake video");
    dir
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a project record by slug. Panics if not found.
pub fn find_project<'a>(manifest: &'a Manifest, slug: &str) -> &'a ProjectRecord {
    manifest
        .projects
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let available = slugs(manifest);
            panic!("project '{slug}' not found. Available: {available:?}")
        })
}

/// All slugs in manifest order.
pub fn slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.projects.iter().map(|p| p.slug.as_str()).collect()
}
