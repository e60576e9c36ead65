//! Line-oriented text report.

use crate::stats::{AggregatedStats, Ranking};

/// Report heading used when none is configured.
pub const DEFAULT_TITLE: &str = "Data Analysis Summary";

/// Formats [`AggregatedStats`] as a stable text report.
///
/// Rendering does not compute anything: the same stats always produce
/// byte-identical output.
#[derive(Debug, Clone)]
pub struct SummaryReporter {
    title: String,
}

impl SummaryReporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the full report, ending with a newline.
    pub fn render(&self, stats: &AggregatedStats) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("Total records: {}\n", stats.total_records));
        out.push_str(&format!("Unique persons: {}\n", stats.unique_persons));
        out.push_str(&format!("Unique divisions: {}\n", stats.unique_divisions));
        out.push_str(&format!("Unique groups: {}\n", stats.unique_groups));
        out.push_str(&format!("Unique departments: {}\n", stats.unique_departments));

        push_section(&mut out, "Top Divisions", &stats.top_divisions, |key, count| {
            format!("{}: {} occurrences", key, count)
        });
        push_section(&mut out, "Top Groups", &stats.top_groups, |key, count| {
            format!("{}: {} occurrences", key, count)
        });
        push_section(&mut out, "Top Departments", &stats.top_departments, |key, count| {
            format!("{}: {} occurrences", key, count)
        });
        push_section(
            &mut out,
            "Division-Group Distribution",
            &stats.top_division_groups,
            |(division, group), count| format!("{} with {}: {} occurrences", division, group, count),
        );
        push_section(
            &mut out,
            "Resource Distribution",
            &stats.persons_per_division,
            |key, count| format!("{}: {} unique persons", key, count),
        );

        out
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

fn push_section<K>(
    out: &mut String,
    heading: &str,
    ranking: &Ranking<K>,
    line: impl Fn(&K, usize) -> String,
) {
    out.push_str(&format!("\n## {}\n", heading));
    for entry in ranking {
        out.push_str(&format!("- {}\n", line(&entry.key, entry.count)));
    }
}
