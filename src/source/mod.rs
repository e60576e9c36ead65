//! Loading of page text produced by the document-extraction step.
//!
//! Two input shapes are accepted:
//! - the extraction JSON (`{"summary": {...}, "content": [{"page", "content"}]}`)
//! - plain text with pages separated by form feeds (`\x0c`)

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::RawPage;

/// Page separator used by text extraction tools.
const FORM_FEED: char = '\u{0c}';

/// Document-level counts reported by the extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub total_pages: usize,
    pub pages_with_content: usize,
}

/// Text of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub page: u32,
    pub content: String,
}

/// The extraction step's output: per-page text plus a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionDocument {
    pub summary: ExtractionSummary,
    pub content: Vec<PageEntry>,
}

#[derive(Deserialize)]
struct DocumentFile {
    #[serde(default)]
    summary: Option<ExtractionSummary>,
    #[serde(default)]
    content: Vec<PageEntry>,
}

impl ExtractionDocument {
    /// Load a document from disk.
    ///
    /// Files with a `.json` extension are parsed as extraction JSON, anything
    /// else as form-feed separated text.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut document = if is_json {
            Self::parse_json(&raw).with_context(|| format!("Invalid extraction file {}", path.display()))?
        } else {
            Self::parse_text(&raw)
        };

        if document.summary.filename.is_none() {
            document.summary.filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
        }

        tracing::debug!(
            path = %path.display(),
            total_pages = document.summary.total_pages,
            pages_with_content = document.summary.pages_with_content,
            "loaded extraction document"
        );

        Ok(document)
    }

    /// Parse extraction JSON.
    ///
    /// A missing summary is derived from the page list.
    pub fn parse_json(raw: &str) -> Result<Self> {
        let file: DocumentFile = serde_json::from_str(raw).context("Malformed extraction JSON")?;

        if let Some(position) = file.content.iter().position(|entry| entry.page == 0) {
            bail!(
                "Page entry {} has page number 0 (page numbers start at 1)",
                position + 1
            );
        }

        let summary = file.summary.unwrap_or_else(|| ExtractionSummary {
            filename: None,
            total_pages: file.content.len(),
            pages_with_content: file.content.len(),
        });

        Ok(Self {
            summary,
            content: file.content,
        })
    }

    /// Split form-feed separated text into pages numbered from 1.
    ///
    /// Blank pages are left out of `content` but still counted in the summary.
    pub fn parse_text(raw: &str) -> Self {
        let trimmed = raw.strip_suffix(FORM_FEED).unwrap_or(raw);
        let mut total_pages = 0;
        let mut content = Vec::new();

        for (number, text) in (1u32..).zip(trimmed.split(FORM_FEED)) {
            total_pages += 1;
            if !text.trim().is_empty() {
                content.push(PageEntry {
                    page: number,
                    content: text.to_string(),
                });
            }
        }

        Self {
            summary: ExtractionSummary {
                filename: None,
                total_pages,
                pages_with_content: content.len(),
            },
            content,
        }
    }

    /// Pages in the order they appear in the document.
    pub fn pages(&self) -> Vec<RawPage> {
        self.content
            .iter()
            .map(|entry| RawPage::new(entry.page, entry.content.clone()))
            .collect()
    }
}
