//! Media reference normalization.
//!
//! Converts raw file paths inside a project folder into [`MediaRef`] values
//! the manifest can carry: local files become web-servable paths under the
//! content route, `.url` marker files are read and become external links.
//! This is the only place the scanner opens a file for its contents — no
//! image decoding, no dimension probing, no transcoding.

use crate::types::MediaRef;
use std::io;
use std::path::PathBuf;

/// Marker extension denoting "this asset is an external link".
pub const URL_MARKER_EXT: &str = ".url";

/// Identity of one project folder: where it lives on disk and how its
/// files are addressed on the published site.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Absolute path of the project folder.
    pub dir: PathBuf,
    /// Name of the parent category folder (`restores`, `portraits`, ...).
    pub category_dir: String,
    /// Project folder name.
    pub name: String,
}

impl ProjectPaths {
    /// Web-servable path for a file inside this project. Platform path
    /// separators are normalized to forward slashes.
    pub fn servable(&self, content_route: &str, rel_path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            content_route,
            self.category_dir,
            self.name,
            rel_path.replace('\\', "/")
        )
    }

    /// `{category folder}/{project folder}`, for display.
    pub fn source_dir(&self) -> String {
        format!("{}/{}", self.category_dir, self.name)
    }
}

/// Convert a relative file path inside a project into a media reference.
///
/// Paths ending in the `.url` marker extension are read from disk and their
/// trimmed contents become an external link; anything else becomes a local
/// file reference. A marker that cannot be read is an `Err` the caller
/// downgrades to a warning — the slot is dropped, the scan continues.
pub fn media_ref(
    paths: &ProjectPaths,
    content_route: &str,
    rel_path: &str,
) -> io::Result<MediaRef> {
    if rel_path.ends_with(URL_MARKER_EXT) {
        let contents = std::fs::read_to_string(paths.dir.join(rel_path))?;
        Ok(MediaRef::url(contents.trim()))
    } else {
        Ok(MediaRef::file(paths.servable(content_route, rel_path)))
    }
}

/// Derive the YouTube poster-frame URL from a watch link, if it is one.
pub fn youtube_thumbnail(href: &str) -> Option<String> {
    let id = youtube_video_id(href)?;
    Some(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}

/// Extract the video id from `youtube.com/watch?v=` and `youtu.be/` links.
fn youtube_video_id(href: &str) -> Option<&str> {
    let rest = href
        .split_once("youtube.com/watch?v=")
        .or_else(|| href.split_once("youtu.be/"))
        .map(|(_, rest)| rest)?;
    let end = rest
        .find(['&', '?', '#', '\n'])
        .unwrap_or(rest.len());
    let id = &rest[..end];
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(dir: &std::path::Path) -> ProjectPaths {
        ProjectPaths {
            dir: dir.to_path_buf(),
            category_dir: "edits".to_string(),
            name: "Sunset".to_string(),
        }
    }

    #[test]
    fn servable_path_includes_category_and_project() {
        let tmp = TempDir::new().unwrap();
        let p = paths(tmp.path());
        assert_eq!(
            p.servable("/content", "final/01.jpg"),
            "/content/edits/Sunset/final/01.jpg"
        );
    }

    #[test]
    fn servable_normalizes_backslashes() {
        let tmp = TempDir::new().unwrap();
        let p = paths(tmp.path());
        assert_eq!(
            p.servable("/content", "timeline\\1_intake.jpg"),
            "/content/edits/Sunset/timeline/1_intake.jpg"
        );
    }

    #[test]
    fn plain_path_becomes_file_ref() {
        let tmp = TempDir::new().unwrap();
        let media = media_ref(&paths(tmp.path()), "/content", "after.jpg").unwrap();
        assert_eq!(media, MediaRef::file("/content/edits/Sunset/after.jpg"));
    }

    #[test]
    fn url_marker_read_and_trimmed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("final.url"), "  https://vimeo.com/99\n").unwrap();
        let media = media_ref(&paths(tmp.path()), "/content", "final.url").unwrap();
        assert_eq!(media, MediaRef::url("https://vimeo.com/99"));
    }

    #[test]
    fn missing_url_marker_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(media_ref(&paths(tmp.path()), "/content", "final.url").is_err());
    }

    #[test]
    fn youtube_watch_link() {
        assert_eq!(
            youtube_thumbnail("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
    }

    #[test]
    fn youtube_short_link_with_query() {
        assert_eq!(
            youtube_thumbnail("https://youtu.be/abc123?t=42").as_deref(),
            Some("https://img.youtube.com/vi/abc123/maxresdefault.jpg")
        );
    }

    #[test]
    fn youtube_link_with_extra_params() {
        assert_eq!(
            youtube_thumbnail("https://www.youtube.com/watch?v=abc123&list=PL9").as_deref(),
            Some("https://img.youtube.com/vi/abc123/maxresdefault.jpg")
        );
    }

    #[test]
    fn non_youtube_link_yields_nothing() {
        assert_eq!(youtube_thumbnail("https://vimeo.com/99"), None);
    }

    #[test]
    fn empty_video_id_yields_nothing() {
        assert_eq!(youtube_thumbnail("https://youtu.be/"), None);
    }
}
