//! Rendering of aggregated statistics.
//!
//! - [`summary`] - Line-oriented text report
//! - [`series`] - Label/value series for chart rendering

mod series;
mod summary;

pub use series::{ChartBundle, ChartLayout, ChartSeries, OTHERS_LABEL};
pub use summary::{SummaryReporter, DEFAULT_TITLE};
