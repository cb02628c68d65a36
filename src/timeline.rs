//! Process-timeline discovery.
//!
//! A project may document its workflow in a `timeline/` subfolder of
//! numbered media files: `1_intake.jpg`, `2_retouching.jpg`, `10_final.jpg`.
//! The numeric prefix orders the steps, the remainder of the stem becomes
//! the label. Files without the `<digits>_` prefix are not timeline entries
//! and are skipped silently — they are allowed to coexist in the folder.

use crate::media::{self, ProjectPaths};
use crate::scan::ScanWarning;
use crate::types::TimelineStep;
use std::fs;
use std::io;

/// Subfolder holding a project's timeline media.
pub const TIMELINE_DIR: &str = "timeline";

/// Split a timeline filename into its step number and label.
///
/// `2_retouching.jpg` → `(2, "retouching")`; `10_final_cut.png` →
/// `(10, "final cut")`. Names without a purely numeric prefix followed by
/// an underscore are not timeline entries.
pub fn parse_step_name(name: &str) -> Option<(u32, String)> {
    let underscore = name.find('_')?;
    let prefix = &name[..underscore];
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = prefix.parse().ok()?;

    let rest = &name[underscore + 1..];
    let stem = match rest.rfind('.') {
        Some(dot) => &rest[..dot],
        None => rest,
    };
    Some((n, stem.replace('_', " ")))
}

/// Discover and order a project's timeline steps.
///
/// Lists files directly inside `timeline/`, keeps numbered ones, and sorts
/// ascending by step number. The sort is stable, so duplicate numbers keep
/// their directory-listing order; duplicates are source data, not an error.
/// An absent subfolder yields the empty sequence.
pub fn extract(
    paths: &ProjectPaths,
    content_route: &str,
    warnings: &mut Vec<ScanWarning>,
) -> io::Result<Vec<TimelineStep>> {
    let dir = paths.dir.join(TIMELINE_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();

    let mut steps = Vec::new();
    for name in names {
        let Some((n, label)) = parse_step_name(&name) else {
            continue;
        };
        let rel = format!("{TIMELINE_DIR}/{name}");
        match media::media_ref(paths, content_route, &rel) {
            Ok(media) => steps.push(TimelineStep { n, label, media }),
            Err(err) => warnings.push(ScanWarning::new(
                paths.source_dir(),
                format!("{rel}: {err}"),
            )),
        }
    }

    steps.sort_by_key(|step| step.n);
    Ok(steps)
}
