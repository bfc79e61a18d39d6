//! Line windows around a cable-ID match.
//!
//! Equipment labels on wiring diagrams usually sit within a few lines of the
//! cable ID, so each occurrence is interpreted against the lines around it.

/// Lines taken on each side of the matched line
pub const WINDOW_RADIUS: usize = 3;

/// The lines surrounding a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    /// Zero-indexed line containing the match
    pub line: usize,
    /// Window lines, in order
    pub lines: Vec<&'a str>,
}

impl ContextWindow<'_> {
    /// Window lines joined with line breaks
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Zero-indexed line number of a byte offset (count of '\n' before it)
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
}

/// Extract the lines `[line - 3, line + 3]` around `offset`, clamped to the text.
pub fn context_window(text: &str, offset: usize) -> ContextWindow<'_> {
    let line = line_of_offset(text, offset);
    let all: Vec<&str> = text.split('\n').collect();
    let last = all.len().saturating_sub(1);

    let start = line.saturating_sub(WINDOW_RADIUS);
    let end = (line + WINDOW_RADIUS).min(last);

    ContextWindow {
        line,
        lines: all[start..=end].to_vec(),
    }
}
