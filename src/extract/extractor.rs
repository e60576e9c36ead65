//! Page traversal and record set assembly.

use rayon::prelude::*;

use super::parser::{LineOutcome, LineParser, SentinelSplitter};
use super::types::{RawPage, Record, RecordSet};

/// Counters collected while extracting records.
///
/// Purely diagnostic: the record set is the same whether or not these are
/// inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Pages scanned
    pub pages: usize,
    /// Lines scanned across all pages
    pub lines: usize,
    /// Lines accepted by the parser as record candidates
    pub candidate_lines: usize,
    /// Candidate lines dropped for having too few fields
    pub malformed_lines: usize,
    /// Records produced
    pub records: usize,
}

impl ExtractionStats {
    fn merge(mut self, other: Self) -> Self {
        self.pages += other.pages;
        self.lines += other.lines;
        self.candidate_lines += other.candidate_lines;
        self.malformed_lines += other.malformed_lines;
        self.records += other.records;
        self
    }
}

/// Turns raw pages into an ordered record set.
///
/// Pages are scanned in parallel, but results are reassembled in the order
/// the pages were supplied so that first-seen tie-breaks downstream stay
/// deterministic. Pages are not re-sorted by page number.
pub struct RecordExtractor {
    parser: Box<dyn LineParser>,
}

impl RecordExtractor {
    /// Create an extractor around a line parsing strategy.
    pub fn new(parser: impl LineParser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }

    pub fn parser(&self) -> &dyn LineParser {
        self.parser.as_ref()
    }

    /// Extract all records from the pages in page-then-line order.
    pub fn extract(&self, pages: &[RawPage]) -> RecordSet {
        self.extract_with_stats(pages).0
    }

    /// Extract records and report how many lines were seen, matched and dropped.
    pub fn extract_with_stats(&self, pages: &[RawPage]) -> (RecordSet, ExtractionStats) {
        let per_page: Vec<(Vec<Record>, ExtractionStats)> = pages
            .par_iter()
            .map(|page| self.extract_page(page))
            .collect();

        let mut records = Vec::with_capacity(per_page.iter().map(|(r, _)| r.len()).sum());
        let mut stats = ExtractionStats::default();
        for (page_records, page_stats) in per_page {
            records.extend(page_records);
            stats = stats.merge(page_stats);
        }

        tracing::debug!(
            pages = stats.pages,
            lines = stats.lines,
            candidates = stats.candidate_lines,
            malformed = stats.malformed_lines,
            records = stats.records,
            "record extraction finished"
        );

        (records, stats)
    }

    fn extract_page(&self, page: &RawPage) -> (Vec<Record>, ExtractionStats) {
        let mut records = Vec::new();
        let mut stats = ExtractionStats {
            pages: 1,
            ..Default::default()
        };

        // The page is trimmed as a whole; individual lines keep their indentation.
        let text = page.text.trim();
        if text.is_empty() {
            return (records, stats);
        }

        for (index, line) in text.split('\n').enumerate() {
            stats.lines += 1;
            match self.parser.parse_line(line) {
                LineOutcome::Skipped => {}
                LineOutcome::Malformed => {
                    stats.candidate_lines += 1;
                    stats.malformed_lines += 1;
                    tracing::trace!(page = page.page_number, line = index + 1, "dropped short record line");
                }
                LineOutcome::Parsed(record) => {
                    stats.candidate_lines += 1;
                    stats.records += 1;
                    records.push(record);
                }
            }
        }

        (records, stats)
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(SentinelSplitter::default())
    }
}
