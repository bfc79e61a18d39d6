//! Configuration for cablegraph.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CABLEGRAPH_STRICT_ETHERNET, CABLEGRAPH_FORMAT)
//! 2. Config file (.cablegraph/config.yaml)
//! 3. Defaults (lenient ethernet mode, JSON output)
//!
//! Config file discovery:
//! - Searches current directory and parents for .cablegraph/config.yaml
//! - Falls back to ~/.cablegraph/config.yaml
//!
//! Command-line flags override everything here.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{parse_flag, ExtractOptions};
use crate::export::OutputFormat;

pub const ENV_STRICT_ETHERNET: &str = "CABLEGRAPH_STRICT_ETHERNET";
pub const ENV_FORMAT: &str = "CABLEGRAPH_FORMAT";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub extraction: Option<ExtractionConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub strict_ethernet: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Options passed to the extractor
    pub options: ExtractOptions,
    /// Default output format
    pub format: OutputFormat,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching a directory and its parents, then home
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".cablegraph").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".cablegraph").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge file values and environment overrides.
///
/// `env` is a lookup so tests can resolve without touching the process
/// environment.
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let (config_file, parsed) = match file {
        Some((path, parsed)) => (Some(path), Some(parsed)),
        None => (None, None),
    };

    let mut strict_ethernet = parsed
        .as_ref()
        .and_then(|c| c.extraction.as_ref())
        .and_then(|e| e.strict_ethernet)
        .unwrap_or(false);

    let mut format = parsed
        .as_ref()
        .and_then(|c| c.output.as_ref())
        .and_then(|o| o.format)
        .unwrap_or_default();

    if let Some(value) = env(ENV_STRICT_ETHERNET) {
        strict_ethernet = parse_flag(ENV_STRICT_ETHERNET, &value)?;
    }

    if let Some(value) = env(ENV_FORMAT) {
        format = OutputFormat::parse(&value).with_context(|| {
            format!(
                "Invalid value for {}: '{}' (expected json, csv or markdown)",
                ENV_FORMAT, value
            )
        })?;
    }

    Ok(ResolvedConfig {
        options: ExtractOptions { strict_ethernet },
        format,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let file = match find_config_file(&cwd) {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    resolve(file, |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, no_env).unwrap();
        assert_eq!(config.options, ExtractOptions::default());
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".cablegraph");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1"
extraction:
  strict_ethernet: true
output:
  format: markdown
"#
        )
        .unwrap();

        let nested = temp.path().join("decks").join("bridge");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_config_file(&nested), Some(config_path.clone()));

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version, "1");

        let config = resolve(Some((config_path.clone(), parsed)), no_env).unwrap();
        assert!(config.options.strict_ethernet);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let parsed: ConfigFile = serde_yaml::from_str(
            "version: \"1\"\nextraction:\n  strict_ethernet: true\n",
        )
        .unwrap();

        let env: HashMap<&str, &str> = [(ENV_STRICT_ETHERNET, "off"), (ENV_FORMAT, "CSV")]
            .into_iter()
            .collect();
        let config = resolve(Some((PathBuf::from("x"), parsed)), |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();

        assert!(!config.options.strict_ethernet);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_malformed_env_fails_fast() {
        let result = resolve(None, |k| {
            (k == ENV_STRICT_ETHERNET).then(|| "sometimes".to_string())
        });
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("sometimes"));

        let result = resolve(None, |k| (k == ENV_FORMAT).then(|| "pdf".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_value_rejected() {
        let parsed = serde_yaml::from_str::<ConfigFile>(
            "version: \"1\"\nextraction:\n  strict_ethernet: maybe\n",
        );
        assert!(parsed.is_err());
    }
}
