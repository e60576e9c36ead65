//! Subcommand handlers.

pub mod analyze;
pub mod config;
pub mod series;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use pagestat::cli::InputArgs;
use pagestat::extract::{ExtractionStats, SentinelSplitter};
use pagestat::{Config, ExtractionDocument, RecordExtractor, RecordSet};

/// Config file from `--config`, or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the input document and extract its records.
pub fn load_records(
    input: &InputArgs,
    config: &Config,
) -> Result<(ExtractionDocument, RecordSet, ExtractionStats)> {
    let parser = match &input.sentinel {
        Some(sentinel) => SentinelSplitter::new(sentinel.clone()),
        None => config.line_parser(),
    }
    .context("Invalid record sentinel")?;

    tracing::debug!(sentinel = parser.sentinel(), "using sentinel line parser");

    let document = ExtractionDocument::load(&input.input)?;
    let extractor = RecordExtractor::new(parser);
    let (records, stats) = extractor.extract_with_stats(&document.pages());

    if records.is_empty() {
        tracing::warn!(
            input = %input.input.display(),
            "no record lines found"
        );
    }

    Ok((document, records, stats))
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Saved to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
