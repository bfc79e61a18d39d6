//! Loading per-page diagram text from disk.
//!
//! Two input shapes are accepted:
//! - `.json`: an array of `{"pageNumber": n, "text": "..."}` or a document
//!   object `{"name": "...", "pages": [...]}`
//! - anything else: plain text with pages separated by form feeds, the way
//!   `pdftotext` writes them

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Document, Page};

/// Page separator in plain-text input
pub const PAGE_BREAK: char = '\x0c';

/// Errors that can occur while loading input documents
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse page list {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid page number 0 in {} (pages are numbered from 1)", .path.display())]
    InvalidPageNumber { path: PathBuf },
}

/// How an input file's contents are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PageListJson,
    PlainText,
}

impl InputKind {
    /// Decide from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputKind::PageListJson,
            _ => InputKind::PlainText,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageListFile {
    Pages(Vec<Page>),
    Document(DocumentFile),
}

/// Object form of a page list; `pages` is required so a stray page object
/// does not load as an empty document
#[derive(Deserialize)]
struct DocumentFile {
    #[serde(default)]
    name: String,
    pages: Vec<Page>,
}

/// Split plain text into pages on form feeds, numbering from 1.
///
/// A trailing form feed does not start an extra page.
pub fn split_pages(text: &str) -> Vec<Page> {
    let body = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
    body.split(PAGE_BREAK)
        .enumerate()
        .map(|(i, page)| Page::new(i as u32 + 1, page))
        .collect()
}

/// Parse already-read file contents into a document
pub fn parse_document(path: &Path, contents: &str, kind: InputKind) -> Result<Document, LoadError> {
    let default_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let document = match kind {
        InputKind::PlainText => Document::new(default_name, split_pages(contents)),
        InputKind::PageListJson => {
            let parsed: PageListFile =
                serde_json::from_str(contents).map_err(|source| LoadError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            match parsed {
                PageListFile::Pages(pages) => Document::new(default_name, pages),
                PageListFile::Document(DocumentFile { name, pages }) => {
                    let name = if name.is_empty() { default_name } else { name };
                    Document::new(name, pages)
                }
            }
        }
    };

    if document.pages.iter().any(|p| p.page_number == 0) {
        return Err(LoadError::InvalidPageNumber {
            path: path.to_path_buf(),
        });
    }

    for page in document.pages.iter().filter(|p| p.text.trim().is_empty()) {
        tracing::warn!(
            document = %document.name,
            page = page.page_number,
            "Page has no text; it will yield no occurrences"
        );
    }

    Ok(document)
}

/// Read and parse one input file
pub async fn load_document(path: &Path) -> Result<Document, LoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let document = parse_document(path, &contents, InputKind::from_path(path))?;
    tracing::debug!(
        document = %document.name,
        pages = document.pages.len(),
        "Loaded document"
    );
    Ok(document)
}
