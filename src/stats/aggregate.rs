//! The bundle of statistics a summary report is rendered from.

use serde::Serialize;

use super::frequency::{distinct_values, frequency, pair_frequency};
use super::membership::distinct_membership;
use super::ranking::{top_n, Ranking};
use crate::extract::{Field, Record};

/// Totals and rankings computed from one record set.
///
/// Rankings are already truncated to the requested length; renderers only
/// format what is here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedStats {
    pub total_records: usize,
    pub unique_persons: usize,
    pub unique_divisions: usize,
    pub unique_groups: usize,
    pub unique_departments: usize,
    pub top_divisions: Ranking<String>,
    pub top_groups: Ranking<String>,
    pub top_departments: Ranking<String>,
    pub top_division_groups: Ranking<(String, String)>,
    /// Divisions ranked by number of distinct persons
    pub persons_per_division: Ranking<String>,
}

impl AggregatedStats {
    /// Compute every statistic, keeping `top` entries per ranking.
    pub fn compute(records: &[Record], top: usize) -> Self {
        Self {
            total_records: records.len(),
            unique_persons: distinct_values(records, Field::Person).len(),
            unique_divisions: distinct_values(records, Field::Division).len(),
            unique_groups: distinct_values(records, Field::Group).len(),
            unique_departments: distinct_values(records, Field::Department).len(),
            top_divisions: top_n(&frequency(records, Field::Division), top),
            top_groups: top_n(&frequency(records, Field::Group), top),
            top_departments: top_n(&frequency(records, Field::Department), top),
            top_division_groups: top_n(
                &pair_frequency(records, Field::Division, Field::Group),
                top,
            ),
            persons_per_division: distinct_membership(records, Field::Division, Field::Person)
                .top_n(top),
        }
    }
}
