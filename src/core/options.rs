//! Extraction options.
//!
//! Options are plain data. Anything parsed from strings (environment, config
//! files, CLI values) goes through [`parse_flag`] so malformed values fail
//! before an extraction starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for one extraction request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Withhold occurrences without an ethernet hint from pairing and skip
    /// the unconfirmed-ethernet confidence penalty (default: false)
    #[serde(default)]
    pub strict_ethernet: bool,
}

impl ExtractOptions {
    pub fn strict() -> Self {
        Self {
            strict_ethernet: true,
        }
    }

    /// Build options from a textual strict-ethernet flag
    pub fn from_strict_flag(value: &str) -> Result<Self, OptionsError> {
        Ok(Self {
            strict_ethernet: parse_flag("strict_ethernet", value)?,
        })
    }
}

/// Malformed option values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("Invalid value for {option}: '{value}' (expected true/false, yes/no, on/off or 1/0)")]
    InvalidFlag { option: String, value: String },
}

/// Parse a boolean option, rejecting anything that is not clearly on or off
pub fn parse_flag(option: &str, value: &str) -> Result<bool, OptionsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(OptionsError::InvalidFlag {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}
