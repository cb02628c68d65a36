//! # Folio Scan
//!
//! Content manifest builder for static portfolio sites. Your filesystem is
//! the data source: a two-level `category/project` tree of folders, each
//! declaring its content type through the files it contains — a before/after
//! pair, a sources-and-finals set, a video file or a `.url` link marker.
//! One scan pass turns that tree into a single JSON manifest the
//! presentation layer treats as its database.
//!
//! ```text
//! Scan    public/content/  →  app/_data/manifest.json
//! ```
//!
//! The manifest is rebuilt from scratch on every run — no incremental
//! state, no merging. That keeps the tool a pure function of the content
//! tree: debuggable (the manifest is human-readable JSON you can inspect),
//! reproducible (same tree, same bytes), and safe to wire into any build
//! pipeline as a plain pre-build step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content tree, drives per-project extraction, produces the manifest |
//! | [`classify`] | File-shape classification rules and the video sub-category heuristic |
//! | [`media`] | Media reference normalization: servable paths, `.url` markers, YouTube covers |
//! | [`timeline`] | Numbered process-timeline discovery and ordering |
//! | [`sidecar`] | `info.yml` sidecar metadata loading |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`types`] | Record types mirroring the manifest's JSON shape |
//! | [`output`] | CLI output formatting — information-first project inventory |
//!
//! # Design Decisions
//!
//! ## Files Over Front-Matter
//!
//! Classification reads the *shape* of a project folder, never file
//! contents (the one exception: `.url` markers, which exist to be read).
//! There is no required metadata file, no database, no per-project config.
//! A photographer drops `before.jpg` and `after.jpg` in a folder and the
//! project exists. `info.yml` is a purely optional overlay.
//!
//! ## Ordered Rules, Not Scoring
//!
//! A folder can satisfy several classification conditions at once. The
//! classifier resolves this with a fixed rule order rather than heuristics:
//! a before/after pair wins over a populated `sources/`+`final/` tree,
//! which wins over stray video files. Predictable beats clever here — the
//! rules fit in a comment and a user can always answer "why did this folder
//! classify as X".
//!
//! ## One Fallible Unit, One Warning
//!
//! Projects are processed independently; any per-folder failure (broken
//! sidecar, unreadable marker) downgrades to a warning on the scan report
//! and the rest of the tree proceeds. The only fatal errors are top-level:
//! an unwritable output location aborts the run before anything is written.

pub mod classify;
pub mod config;
pub mod media;
pub mod output;
pub mod scan;
pub mod sidecar;
pub mod timeline;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
