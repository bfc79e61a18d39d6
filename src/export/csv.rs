//! CSV export of edges.

use crate::domain::{Edge, ExtractionResult};

/// Column header row
pub const CSV_HEADER: &str = "from,to,cable_id,media,page_refs,confidence,tag,evidence";

/// One CSV row per edge, header first, `\n` line endings
pub fn render_csv(result: &ExtractionResult) -> String {
    let mut out = String::with_capacity(64 * (result.edges.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for edge in &result.edges {
        out.push_str(&edge_row(edge));
        out.push('\n');
    }

    out
}

fn edge_row(edge: &Edge) -> String {
    let pages = edge
        .page_refs
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";");

    [
        escape_field(&edge.from),
        escape_field(&edge.to),
        escape_field(&edge.cable_id),
        escape_field(&edge.media),
        pages,
        format!("{:.2}", edge.confidence),
        edge.tag.as_str().to_string(),
        escape_field(&edge.evidence.join(";")),
    ]
    .join(",")
}

/// Quote a field when it holds a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
