//! Configuration file handling.
//!
//! The config lives at `<config dir>/pagestat/config.toml`. Every field has a
//! default, so a missing file or a partial file is always valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::extract::{ExtractError, SentinelSplitter, DEFAULT_SENTINEL};
use crate::report::{ChartLayout, DEFAULT_TITLE};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PAGESTAT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionSection,
    pub report: ReportSection,
    pub charts: ChartsSection,
}

/// `[extraction]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSection {
    /// Literal prefix that marks a record line
    pub sentinel: String,
}

impl Default for ExtractionSection {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

/// `[report]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Heading of the text report
    pub title: String,
    /// Entries per ranked section
    pub top_n: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            top_n: 5,
        }
    }
}

/// `[charts]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsSection {
    /// Entries per chart series
    pub top_n: usize,
    /// Named slices in the resource pie; the rest are summed as `Others`
    pub pie_slices: usize,
    /// Bars in the division-group chart
    pub max_pairs: usize,
}

impl Default for ChartsSection {
    fn default() -> Self {
        let layout = ChartLayout::default();
        Self {
            top_n: 10,
            pie_slices: layout.pie_slices,
            max_pairs: layout.max_pairs,
        }
    }
}

impl ChartsSection {
    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            pie_slices: self.pie_slices,
            max_pairs: self.max_pairs,
        }
    }
}

impl Config {
    /// Path of the config file.
    ///
    /// `PAGESTAT_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("pagestat").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path()?)
    }

    /// Write as TOML, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Line parser for the configured sentinel.
    pub fn line_parser(&self) -> Result<SentinelSplitter, ExtractError> {
        SentinelSplitter::new(self.extraction.sentinel.clone())
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any fields missing from `content` with their default values.
///
/// Existing values, comments and formatting are kept as they are.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Config is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Default config is not valid TOML")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            if !doc.contains_key(section) {
                doc.insert(section, default_item.clone());
                added_fields.push(section.to_string());
            }
            continue;
        };

        let present = doc.contains_key(section);
        match doc.get_mut(section).and_then(Item::as_table_like_mut) {
            Some(existing) => {
                for (key, value) in default_table.iter() {
                    if !existing.contains_key(key) {
                        existing.insert(key, value.clone());
                        added_fields.push(format!("{}.{}", section, key));
                    }
                }
            }
            None if present => {
                tracing::warn!(section, "config entry is not a table, leaving it untouched");
            }
            None => {
                doc.insert(section, default_item.clone());
                sections_added.push(section.to_string());
                added_fields.extend(
                    default_table
                        .iter()
                        .map(|(key, _)| format!("{}.{}", section, key)),
                );
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
