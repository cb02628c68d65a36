//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every project is its semantic identity — positional index, title, and
//! category — with filesystem paths shown as secondary context via indented
//! `Source:` lines. Warnings get their own section so a broken folder is
//! visible without scrolling through the inventory.
//!
//! ```text
//! Projects
//! 001 Family-Photo (restores)
//!     Source: restores/Family-Photo/
//!     Cover: /content/restores/Family-Photo/after.jpg
//!     Timeline: 3 steps
//! 002 Summer-Promo (videos, promo)
//!     Source: videos/Summer-Promo/
//!     Cover: https://img.youtube.com/vi/abc123/maxresdefault.jpg
//!
//! Warnings
//!     edits/Bad-Sidecar: info.yml: ...
//! ```
//!
//! The `format_*` function returns `Vec<String>` and is pure — no I/O, no
//! side effects — so tests can assert on exact lines; `print_*` is the thin
//! stdout wrapper.

use crate::scan::ScanReport;
use crate::types::{Category, ProjectRecord};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for one project: index, title, category, and the video
/// sub-category when there is one.
fn project_header(index: usize, record: &ProjectRecord) -> String {
    let category = record.category.as_str();
    match record.video_category {
        Some(sub) if record.category == Category::Videos => format!(
            "{} {} ({category}, {})",
            format_index(index),
            record.title,
            sub.as_str()
        ),
        _ => format!("{} {} ({category})", format_index(index), record.title),
    }
}

/// Format scan output showing the discovered project inventory.
pub fn format_scan_output(report: &ScanReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (i, record) in report.manifest.projects.iter().enumerate() {
        lines.push(project_header(i + 1, record));
        lines.push(format!("    Source: {}/", record.source_dir));
        if let Some(cover) = &record.cover {
            lines.push(format!("    Cover: {}", cover.location()));
        }
        if !record.timeline.is_empty() {
            lines.push(format!("    Timeline: {} steps", record.timeline.len()));
        }
    }

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &report.warnings {
            lines.push(format!("    {warning}"));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(report: &ScanReport) {
    for line in format_scan_output(report) {
        println!("{}", line);
    }
}
