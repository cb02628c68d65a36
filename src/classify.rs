//! Project folder classification.
//!
//! A project folder declares its content type through the files it contains,
//! not through any explicit marker. [`classify`] inspects the folder's
//! recursive file listing and picks exactly one [`Category`] via an ordered
//! rule set — first match wins, so a folder satisfying several loose
//! conditions (say, a before/after pair *and* a populated `sources/`+`final/`
//! tree) lands in the earliest matching bucket. That precedence is part of
//! the contract, not an accident.
//!
//! ## Rules, in order
//!
//! 1. `before.*` and `after.*` both present at the top level → `restores`
//! 2. at least one file under `sources/` and one under `final/` →
//!    `portraits` when the parent category folder is named `portraits`,
//!    otherwise `edits`
//! 3. a top-level `final.url` marker, or any file with a video extension →
//!    `videos`
//! 4. anything else → `unknown` (still emitted, payload-less)
//!
//! Rule 2 is the one place classification depends on *position in the tree*
//! rather than file shape alone: edits and portraits are structurally
//! identical on disk.

use crate::config::VideoConfig;
use crate::types::{Category, VideoCategory};

/// Marker file whose contents are an external link to the final video.
pub const URL_MARKER: &str = "final.url";

/// Classify one project folder from its recursive relative file listing
/// and the name of the category folder it lives under.
pub fn classify(files: &[String], parent_category: &str, video: &VideoConfig) -> Category {
    let has_before = files
        .iter()
        .any(|f| is_top_level(f) && f.starts_with("before."));
    let has_after = files
        .iter()
        .any(|f| is_top_level(f) && f.starts_with("after."));
    if has_before && has_after {
        return Category::Restores;
    }

    let has_sources = files.iter().any(|f| f.starts_with("sources/"));
    let has_finals = files.iter().any(|f| f.starts_with("final/"));
    if has_sources && has_finals {
        return if parent_category == "portraits" {
            Category::Portraits
        } else {
            Category::Edits
        };
    }

    let has_video_final = files
        .iter()
        .any(|f| f == URL_MARKER || video.matches_extension(f));
    if has_video_final {
        return Category::Videos;
    }

    Category::Unknown
}

fn is_top_level(rel_path: &str) -> bool {
    !rel_path.contains('/')
}

/// Guess a video's sub-category from its project folder name.
///
/// Case-insensitive substring match, promo keywords before shorts keywords,
/// `longform` as the catch-all. A heuristic, not a guarantee — an
/// ambiguously named project silently defaults to `longform`. Sidecar
/// overrides take precedence over this function entirely; callers only
/// reach it when no override exists.
pub fn video_category_for(project_name: &str, video: &VideoConfig) -> VideoCategory {
    let name = project_name.to_lowercase();
    let hit = |keywords: &[String]| keywords.iter().any(|k| name.contains(&k.to_lowercase()));

    if hit(&video.promo_keywords) {
        VideoCategory::Promo
    } else if hit(&video.shorts_keywords) {
        VideoCategory::Shorts
    } else {
        VideoCategory::Longform
    }
}
