//! Rendering an extraction result for callers.
//!
//! - JSON: the result as-is (camelCase fields, review items tagged by `type`)
//! - CSV: one row per edge
//! - Markdown: a review report for humans

pub mod csv;
pub mod report;

pub use csv::{render_csv, CSV_HEADER};
pub use report::render_markdown;

use serde::{Deserialize, Serialize};

use crate::domain::ExtractionResult;

/// Output format for a rendered result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Parse a format name (case-insensitive; `md` is accepted for markdown)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

/// Render a result in the requested format
pub fn render(
    result: &ExtractionResult,
    format: OutputFormat,
    title: &str,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Csv => Ok(render_csv(result)),
        OutputFormat::Markdown => Ok(render_markdown(result, title)),
    }
}
