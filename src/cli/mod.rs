//! Command-line interface for cablegraph.
//!
//! Provides commands for extracting cable connections from per-page diagram
//! text, inspecting individual occurrences, and showing configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::core::{ExtractOptions, Extractor};
use crate::domain::Document;
use crate::export::{render, OutputFormat};
use crate::ingest::load_document;

/// cablegraph - Cable connection extraction from wiring-diagram text
#[derive(Parser, Debug)]
#[command(name = "cablegraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract connections from one or more documents (pairs across all of them)
    Extract {
        /// Input files: JSON page lists or form-feed separated text
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Only pair occurrences with an ethernet hint in their context
        #[arg(long, overrides_with = "no_strict_ethernet")]
        strict_ethernet: bool,

        /// Pair every occurrence, even if configuration enables strict mode
        #[arg(long, overrides_with = "strict_ethernet")]
        no_strict_ethernet: bool,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Title for the markdown report
        #[arg(long, default_value = "Cable connection review")]
        title: String,
    },

    /// List every cable-ID occurrence in a document as JSON lines
    Scan {
        /// Input file
        input: PathBuf,

        /// Score without the unconfirmed-ethernet penalty
        #[arg(long, overrides_with = "no_strict_ethernet")]
        strict_ethernet: bool,

        /// Apply the penalty even if configuration enables strict mode
        #[arg(long, overrides_with = "strict_ethernet")]
        no_strict_ethernet: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Output format for CLI (maps to OutputFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Full result as JSON
    Json,

    /// Edges as CSV
    Csv,

    /// Markdown review report
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Extract {
                inputs,
                strict_ethernet,
                no_strict_ethernet,
                format,
                output,
                title,
            } => {
                let strict = strict_override(strict_ethernet, no_strict_ethernet);
                run_extract(inputs, strict, format, output, title).await
            }
            Commands::Scan {
                input,
                strict_ethernet,
                no_strict_ethernet,
            } => run_scan(input, strict_override(strict_ethernet, no_strict_ethernet)).await,
            Commands::Config => show_config(),
        }
    }
}

/// Load all inputs concurrently, keeping argument order
async fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { load_document(&path).await }))
        .collect();

    let mut documents = Vec::with_capacity(handles.len());
    for handle in handles {
        documents.push(handle.await.context("Document loader task failed")??);
    }

    Ok(documents)
}

/// `--strict-ethernet` / `--no-strict-ethernet`, last one given wins
fn strict_override(strict: bool, no_strict: bool) -> Option<bool> {
    match (strict, no_strict) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// CLI flag wins; otherwise configuration decides
fn resolve_options(strict_flag: Option<bool>) -> Result<ExtractOptions> {
    match strict_flag {
        Some(strict_ethernet) => Ok(ExtractOptions { strict_ethernet }),
        None => Ok(crate::config::config()?.options),
    }
}

async fn run_extract(
    inputs: Vec<PathBuf>,
    strict_ethernet: Option<bool>,
    format: Option<FormatArg>,
    output: Option<PathBuf>,
    title: String,
) -> Result<()> {
    let options = resolve_options(strict_ethernet)?;
    let format = match format {
        Some(f) => f.into(),
        None => crate::config::config()?.format,
    };

    let documents = load_documents(&inputs).await?;

    let result = tokio::task::spawn_blocking(move || Extractor::new(options).extract(&documents))
        .await
        .context("Extraction task failed")?;

    info!(
        edges = result.summary.total_edges,
        review = result.summary.total_review,
        fingerprint = %result.fingerprint(),
        "Result ready"
    );

    let rendered = render(&result, format, &title).context("Failed to render result")?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), format = format.as_str(), "Wrote output");
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}

async fn run_scan(input: PathBuf, strict_ethernet: Option<bool>) -> Result<()> {
    let options = resolve_options(strict_ethernet)?;
    let document = load_document(&input).await?;

    for occurrence in Extractor::new(options).scan_document(&document) {
        let line = serde_json::to_string(&occurrence).context("Failed to serialize occurrence")?;
        println!("{}", line);
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!("cablegraph configuration");
    println!();
    match &config.config_file {
        Some(path) => println!("Config file:     {}", path.display()),
        None => println!("Config file:     (none, using defaults)"),
    }
    println!("Strict ethernet: {}", config.options.strict_ethernet);
    println!("Output format:   {}", config.format.as_str());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_args() {
        let cli = Cli::try_parse_from([
            "cablegraph",
            "extract",
            "a.json",
            "b.txt",
            "--strict-ethernet",
            "--format",
            "csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Extract {
                inputs,
                strict_ethernet,
                format,
                output,
                ..
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.json"), PathBuf::from("b.txt")]);
                assert!(strict_ethernet);
                assert!(matches!(format, Some(FormatArg::Csv)));
                assert!(output.is_none());
            }
            other => panic!("Expected extract, got {:?}", other),
        }
    }

    fn extract_strictness(args: &[&str]) -> Option<bool> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Extract {
                strict_ethernet,
                no_strict_ethernet,
                ..
            } => strict_override(strict_ethernet, no_strict_ethernet),
            other => panic!("Expected extract, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_ethernet_can_be_switched_off() {
        assert_eq!(extract_strictness(&["cablegraph", "extract", "a.txt"]), None);
        assert_eq!(
            extract_strictness(&["cablegraph", "extract", "a.txt", "--strict-ethernet"]),
            Some(true)
        );
        assert_eq!(
            extract_strictness(&["cablegraph", "extract", "a.txt", "--no-strict-ethernet"]),
            Some(false)
        );
        assert_eq!(
            extract_strictness(&[
                "cablegraph",
                "extract",
                "a.txt",
                "--strict-ethernet",
                "--no-strict-ethernet",
            ]),
            Some(false)
        );

        let options = resolve_options(Some(false)).unwrap();
        assert!(!options.strict_ethernet);
    }

    #[test]
    fn test_extract_requires_input() {
        assert!(Cli::try_parse_from(["cablegraph", "extract"]).is_err());
    }
}
