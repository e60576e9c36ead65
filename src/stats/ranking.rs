//! Top-N selection with first-seen tie-breaks.

use std::hash::Hash;

use serde::Serialize;

use super::frequency::FrequencyTable;

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub count: usize,
}

/// Keys ordered by count, highest first.
///
/// Keys with equal counts keep the order in which they were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking<K> {
    entries: Vec<RankedEntry<K>>,
}

impl<K> Ranking<K> {
    /// Rank `(key, count)` pairs given in first-seen order, keeping at most `n`.
    pub fn from_counts(counts: impl IntoIterator<Item = (K, usize)>, n: usize) -> Self {
        let mut entries: Vec<RankedEntry<K>> = counts
            .into_iter()
            .map(|(key, count)| RankedEntry { key, count })
            .collect();
        // Stable sort: equal counts stay in first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[RankedEntry<K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry<K>> {
        self.entries.iter()
    }
}

impl<'a, K> IntoIterator for &'a Ranking<K> {
    type Item = &'a RankedEntry<K>;
    type IntoIter = std::slice::Iter<'a, RankedEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The `n` most frequent keys of `table`.
///
/// Returns every key when `n` exceeds the table size, and an empty ranking
/// for an empty table or `n == 0`.
pub fn top_n<K: Eq + Hash + Clone>(table: &FrequencyTable<K>, n: usize) -> Ranking<K> {
    Ranking::from_counts(table.iter().map(|(key, count)| (key.clone(), count)), n)
}
