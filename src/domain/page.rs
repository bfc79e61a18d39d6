//! Pages and documents handed to the extractor.
//!
//! A page is the plain text of one physical diagram page. Producing it from
//! PDF bytes is the caller's job; this crate only consumes the text.

use serde::{Deserialize, Deserializer, Serialize};

/// Plain text of one diagram page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number within its document
    pub page_number: u32,

    /// Extracted text (null or non-string input is read as empty)
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

impl Page {
    /// Create a new page
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// An ordered list of pages from one uploaded diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name (usually the source file name)
    #[serde(default)]
    pub name: String,

    /// Pages in ascending page-number order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document from its pages
    pub fn new(name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Build a document from raw page texts, numbering pages from 1
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page::new(i as u32 + 1, text))
            .collect();
        Self::new(name, pages)
    }
}

/// Accept any JSON value for page text; anything but a string becomes "".
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
