//! Record recovery from extracted page text.
//!
//! Page text coming out of a document-extraction step carries tabular rows
//! flattened into free text. This module scans each page line by line,
//! recognises candidate rows and splits them into fixed-arity [`Record`]s.
//!
//! # Module Structure
//!
//! - [`types`] - Pages, records and record fields
//! - [`parser`] - Line classification strategies
//! - [`extractor`] - Page traversal and record set assembly

mod error;
mod extractor;
mod parser;
mod types;

pub use error::ExtractError;
pub use extractor::{ExtractionStats, RecordExtractor};
pub use parser::{LineOutcome, LineParser, SentinelSplitter, DEFAULT_SENTINEL};
pub use types::{Field, RawPage, Record, RecordSet};
