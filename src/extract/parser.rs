//! Line classification strategies.
//!
//! A [`LineParser`] decides whether a line of page text is a record row and,
//! if so, splits it into fields. The extractor only talks to this trait, so a
//! stricter row format can replace [`SentinelSplitter`] without touching the
//! aggregation code.

use super::error::ExtractError;
use super::types::Record;

/// Marker that starts every person token in the source documents.
pub const DEFAULT_SENTINEL: &str = "Person_";

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Not a record line (narrative text, headers, blank lines)
    Skipped,
    /// Looked like a record line but had too few fields
    Malformed,
    /// Successfully parsed record
    Parsed(Record),
}

/// Strategy for turning one line of text into a record.
pub trait LineParser: Send + Sync {
    fn parse_line(&self, line: &str) -> LineOutcome;
}

/// Recognises lines by a literal prefix and splits them on whitespace.
///
/// The sentinel is matched against the raw line, so indented rows are not
/// candidates. The sentinel is part of the first token and therefore part of
/// the `person` value. Tokens beyond the fourth are discarded.
#[derive(Debug, Clone)]
pub struct SentinelSplitter {
    sentinel: String,
}

impl SentinelSplitter {
    /// Create a splitter for the given prefix.
    pub fn new(sentinel: impl Into<String>) -> Result<Self, ExtractError> {
        let sentinel = sentinel.into();
        if sentinel.is_empty() {
            return Err(ExtractError::EmptySentinel);
        }
        Ok(Self { sentinel })
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}

impl Default for SentinelSplitter {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl LineParser for SentinelSplitter {
    fn parse_line(&self, line: &str) -> LineOutcome {
        if !line.starts_with(&self.sentinel) {
            return LineOutcome::Skipped;
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(person), Some(division), Some(group), Some(department)) => {
                LineOutcome::Parsed(Record::new(person, division, group, department))
            }
            _ => LineOutcome::Malformed,
        }
    }
}
