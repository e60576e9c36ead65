//! pagestat - recover tabular records from extracted page text.
//!
//! Raw page text flows one way through the crate:
//!
//! ```text
//! RawPage -> RecordExtractor -> RecordSet -> stats -> AggregatedStats -> SummaryReporter
//! ```
//!
//! Reading source documents and drawing charts happen outside; this crate
//! consumes page text and produces report text plus label/value series.

pub mod cli;
pub mod config;
pub mod extract;
pub mod report;
pub mod source;
pub mod stats;

pub use config::Config;
pub use extract::{Field, RawPage, Record, RecordExtractor, RecordSet};
pub use report::{ChartBundle, ChartSeries, SummaryReporter};
pub use source::ExtractionDocument;
pub use stats::AggregatedStats;
