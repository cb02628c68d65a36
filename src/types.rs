//! Shared record types serialized into the manifest.
//!
//! The manifest is the contract between the scanner and the presentation
//! layer: one JSON document, `{ "projects": [ ... ] }`, newest project first.
//! Everything in this module mirrors that document's shape exactly — the
//! serde attributes here *are* the wire format.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Normalized pointer to a displayable asset.
///
/// Serializes as `{"type": "file", "src": ...}` for local assets served
/// under the content route, or `{"type": "url", "href": ...}` for external
/// links (e.g. a streaming-site URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaRef {
    File { src: String },
    Url { href: String },
}

impl MediaRef {
    pub fn file(src: impl Into<String>) -> Self {
        MediaRef::File { src: src.into() }
    }

    pub fn url(href: impl Into<String>) -> Self {
        MediaRef::Url { href: href.into() }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, MediaRef::File { .. })
    }

    /// The servable location: `src` for files, `href` for links.
    pub fn location(&self) -> &str {
        match self {
            MediaRef::File { src } => src,
            MediaRef::Url { href } => href,
        }
    }
}

/// Top-level grouping a project folder is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restores,
    Edits,
    Portraits,
    Videos,
    Unknown,
}

impl Category {
    /// Lowercase name as used in slugs and the serialized manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Restores => "restores",
            Category::Edits => "edits",
            Category::Portraits => "portraits",
            Category::Videos => "videos",
            Category::Unknown => "unknown",
        }
    }
}

/// Video sub-category, from a sidecar override or the name heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCategory {
    Promo,
    Shorts,
    Longform,
}

impl VideoCategory {
    /// Lowercase name as used in the serialized manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            VideoCategory::Promo => "promo",
            VideoCategory::Shorts => "shorts",
            VideoCategory::Longform => "longform",
        }
    }
}

/// The `final` slot of an edit or portrait: a single asset serializes as
/// the scalar form, several as an array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FinalMedia {
    One(MediaRef),
    Many(Vec<MediaRef>),
}

impl FinalMedia {
    /// Build from a list, collapsing singletons. Empty input means the
    /// slot has no media at all.
    pub fn from_vec(mut finals: Vec<MediaRef>) -> Option<Self> {
        match finals.len() {
            0 => None,
            1 => Some(FinalMedia::One(finals.remove(0))),
            _ => Some(FinalMedia::Many(finals)),
        }
    }

    /// First entry. `Many` is non-empty by construction via
    /// [`from_vec`](FinalMedia::from_vec).
    pub fn first(&self) -> &MediaRef {
        match self {
            FinalMedia::One(media) => media,
            FinalMedia::Many(medias) => &medias[0],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestoreMedia {
    pub before: MediaRef,
    pub after: MediaRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMedia {
    pub sources: Vec<MediaRef>,
    pub r#final: FinalMedia,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoMedia {
    pub r#final: MediaRef,
}

/// Category-specific payload, mutually exclusive by construction.
///
/// Flattened into the record, so the variant name becomes the payload key:
/// `"restore": {...}`, `"edit": {...}`, and so on. `unknown` projects carry
/// no payload at all (`None` at the record level).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Restore(RestoreMedia),
    Edit(EditMedia),
    Portrait(EditMedia),
    Video(VideoMedia),
}

/// One step of a project's process timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineStep {
    pub n: u32,
    pub label: String,
    pub media: MediaRef,
}

/// The unit of manifest output: one project folder, classified and
/// normalized.
#[derive(Debug, Serialize)]
pub struct ProjectRecord {
    /// `{category}-{lowercased folder name}`; unique across the manifest.
    pub slug: String,
    pub category: Category,
    /// Raw project folder name, used as the display string.
    pub title: String,
    /// Representative media, derived deterministically from the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<MediaRef>,
    /// Sidecar metadata, passed through when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<crate::sidecar::ProjectInfo>,
    #[serde(flatten)]
    pub payload: Option<Payload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineStep>,
    #[serde(rename = "videoCategory", skip_serializing_if = "Option::is_none")]
    pub video_category: Option<VideoCategory>,
    /// `{category folder}/{project folder}`, for human-readable output only.
    #[serde(skip)]
    pub source_dir: String,
    /// Project directory mtime. Ordering only, never emitted.
    #[serde(skip)]
    pub mod_time: SystemTime,
}

/// The aggregated manifest document.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub projects: Vec<ProjectRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_ref_file_shape() {
        let media = MediaRef::file("/content/edits/Sunset/final/01.jpg");
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({"type": "file", "src": "/content/edits/Sunset/final/01.jpg"})
        );
    }

    #[test]
    fn media_ref_url_shape() {
        let media = MediaRef::url("https://youtu.be/abc123");
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({"type": "url", "href": "https://youtu.be/abc123"})
        );
    }

    #[test]
    fn final_media_singleton_collapses_to_scalar() {
        let fm = FinalMedia::from_vec(vec![MediaRef::file("/a.jpg")]).unwrap();
        let value = serde_json::to_value(&fm).unwrap();
        assert_eq!(value, json!({"type": "file", "src": "/a.jpg"}));
    }

    #[test]
    fn final_media_multiple_stay_an_array() {
        let fm =
            FinalMedia::from_vec(vec![MediaRef::file("/a.jpg"), MediaRef::file("/b.jpg")]).unwrap();
        let value = serde_json::to_value(&fm).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn final_media_empty_is_none() {
        assert!(FinalMedia::from_vec(vec![]).is_none());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Category::Restores).unwrap(),
            json!("restores")
        );
        assert_eq!(Category::Portraits.as_str(), "portraits");
    }

    fn record(payload: Option<Payload>) -> ProjectRecord {
        ProjectRecord {
            slug: "videos-demo".to_string(),
            category: Category::Videos,
            title: "Demo".to_string(),
            cover: None,
            info: None,
            payload,
            timeline: vec![],
            video_category: None,
            source_dir: "videos/Demo".to_string(),
            mod_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn payload_flattens_under_its_category_key() {
        let rec = record(Some(Payload::Video(VideoMedia {
            r#final: MediaRef::file("/content/videos/Demo/final.mp4"),
        })));
        let value = serde_json::to_value(&rec).unwrap();
        assert!(value.get("video").is_some());
        assert!(value.get("restore").is_none());
        assert_eq!(
            value["video"]["final"]["src"],
            json!("/content/videos/Demo/final.mp4")
        );
    }

    #[test]
    fn absent_payload_emits_no_key() {
        let value = serde_json::to_value(record(None)).unwrap();
        for key in ["restore", "edit", "portrait", "video"] {
            assert!(value.get(key).is_none(), "unexpected key {key}");
        }
    }

    #[test]
    fn internal_fields_never_serialized() {
        let value = serde_json::to_value(record(None)).unwrap();
        assert!(value.get("modTime").is_none());
        assert!(value.get("mod_time").is_none());
        assert!(value.get("source_dir").is_none());
    }

    #[test]
    fn empty_timeline_omitted() {
        let value = serde_json::to_value(record(None)).unwrap();
        assert!(value.get("timeline").is_none());
    }

    #[test]
    fn video_category_uses_camel_case_key() {
        let mut rec = record(None);
        rec.video_category = Some(VideoCategory::Shorts);
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["videoCategory"], json!("shorts"));
    }
}
