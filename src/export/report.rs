//! Markdown review report.
//!
//! Meant for the person checking the diagram: summary counts, the resolved
//! edges, then everything that still needs a human look, grouped by type.

use std::fmt::Write;

use crate::domain::{ExtractionResult, ReviewItem};

/// Render the review report for an extraction result
pub fn render_markdown(result: &ExtractionResult, title: &str) -> String {
    let mut out = String::new();
    let s = &result.summary;

    // Writing to a String cannot fail
    let _ = writeln!(out, "# {}", title);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Count |");
    let _ = writeln!(out, "|---|---|");
    for (label, count) in [
        ("Edges", s.total_edges),
        ("System-level", s.system_level),
        ("Internal", s.internal),
        ("Unknown", s.unknown),
        ("Review items", s.total_review),
        ("Unpaired", s.unpaired),
        ("Ambiguous", s.ambiguous),
        ("Extra", s.extra),
        ("Occurrences", s.total_occurrences),
        ("Filtered (strict ethernet)", s.filtered_occurrences),
    ] {
        let _ = writeln!(out, "| {} | {} |", label, count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "## Edges");
    let _ = writeln!(out);
    if result.edges.is_empty() {
        let _ = writeln!(out, "_No connections resolved._");
    } else {
        let _ = writeln!(out, "| Cable ID | From | To | Media | Pages | Confidence | Tag |");
        let _ = writeln!(out, "|---|---|---|---|---|---|---|");
        for edge in &result.edges {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {:.2} | {} |",
                cell(&edge.cable_id),
                cell(&edge.from),
                cell(&edge.to),
                cell(&edge.media),
                pages(&edge.page_refs),
                edge.confidence,
                edge.tag.as_str()
            );
        }
    }

    for (heading, kind) in [
        ("Unpaired", "unpaired"),
        ("Ambiguous", "ambiguous"),
        ("Extra sightings", "extra"),
    ] {
        let items: Vec<&ReviewItem> = result
            .review
            .iter()
            .filter(|item| item.type_name() == kind)
            .collect();
        if items.is_empty() {
            continue;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "## {} ({})", heading, items.len());
        let _ = writeln!(out);
        for item in items {
            let _ = writeln!(out, "- {}", review_line(item));
        }
    }

    out
}

fn review_line(item: &ReviewItem) -> String {
    match item {
        ReviewItem::Unpaired {
            cable_id,
            page_refs,
            endpoint,
            confidence,
            media,
            ..
        }
        | ReviewItem::Extra {
            cable_id,
            page_refs,
            endpoint,
            confidence,
            media,
            ..
        } => format!(
            "`{}` p. {}: {} ({:.2}, {})",
            cable_id,
            pages(page_refs),
            endpoint,
            confidence,
            media
        ),
        ReviewItem::Ambiguous {
            cable_id,
            page_refs,
            occurrences,
            candidates,
        } => format!(
            "`{}` p. {}: {} sightings, candidates {}",
            cable_id,
            pages(page_refs),
            occurrences,
            candidates.join(", ")
        ),
    }
}

fn pages(page_refs: &[u32]) -> String {
    page_refs
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keep table cells from breaking the row
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
