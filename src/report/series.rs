//! Label/value series consumed by chart renderers.

use serde::{Deserialize, Serialize};

use crate::stats::{AggregatedStats, Ranking};

/// Label of the slice that collects entries beyond the kept ones.
pub const OTHERS_LABEL: &str = "Others";

/// One chart's worth of data: parallel label and value lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl ChartSeries {
    /// Build a series from a ranking of single-value keys.
    pub fn from_ranking(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        ranking: &Ranking<String>,
    ) -> Self {
        Self::from_entries(title, x_label, y_label, ranking, |key| key.clone())
    }

    /// Build a series from a ranking of pairs, labelled `A-B`.
    pub fn from_pair_ranking(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        ranking: &Ranking<(String, String)>,
    ) -> Self {
        Self::from_entries(title, x_label, y_label, ranking, |(a, b)| {
            format!("{}-{}", a, b)
        })
    }

    fn from_entries<K>(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        ranking: &Ranking<K>,
        label: impl Fn(&K) -> String,
    ) -> Self {
        let (labels, values) = ranking.iter().map(|e| (label(&e.key), e.count)).unzip();
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            labels,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Keep at most `n` entries.
    pub fn truncate(mut self, n: usize) -> Self {
        self.labels.truncate(n);
        self.values.truncate(n);
        self
    }

    /// Keep the first `keep` entries and fold the rest into one trailing
    /// `Others` entry holding their summed values.
    ///
    /// Series with `keep` or fewer entries are returned unchanged.
    pub fn with_others(mut self, keep: usize) -> Self {
        if self.labels.len() <= keep {
            return self;
        }
        let rest: usize = self.values.drain(keep..).sum();
        self.labels.truncate(keep);
        self.labels.push(OTHERS_LABEL.to_string());
        self.values.push(rest);
        self
    }
}

/// Size limits for the charts that do not use the plain top-N cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Named slices in the resource pie before the rest become `Others`
    pub pie_slices: usize,
    /// Bars in the division-group chart
    pub max_pairs: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            pie_slices: 5,
            max_pairs: 7,
        }
    }
}

/// The standard set of charts for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBundle {
    pub divisions: ChartSeries,
    pub groups: ChartSeries,
    pub departments: ChartSeries,
    pub division_groups: ChartSeries,
    pub resource_distribution: ChartSeries,
}

impl ChartBundle {
    /// Build the bundle with the default [`ChartLayout`].
    pub fn from_stats(stats: &AggregatedStats) -> Self {
        Self::with_layout(stats, ChartLayout::default())
    }

    pub fn with_layout(stats: &AggregatedStats, layout: ChartLayout) -> Self {
        let occurrences = "Number of Occurrences";
        let top = |ranking_len: usize, what: &str| format!("Top {} {} by Occurrence", ranking_len, what);

        Self {
            divisions: ChartSeries::from_ranking(
                top(stats.top_divisions.len(), "Divisions"),
                "Division",
                occurrences,
                &stats.top_divisions,
            ),
            groups: ChartSeries::from_ranking(
                top(stats.top_groups.len(), "Groups"),
                "Group",
                occurrences,
                &stats.top_groups,
            ),
            departments: ChartSeries::from_ranking(
                top(stats.top_departments.len(), "Departments"),
                "Department",
                occurrences,
                &stats.top_departments,
            ),
            division_groups: ChartSeries::from_pair_ranking(
                "Top Division-Group Relationships",
                "Division-Group Pair",
                occurrences,
                &stats.top_division_groups,
            )
            .truncate(layout.max_pairs),
            resource_distribution: ChartSeries::from_ranking(
                "Resource Distribution by Division",
                "Division",
                "Unique Persons",
                &stats.persons_per_division,
            )
            .with_others(layout.pie_slices),
        }
    }
}
