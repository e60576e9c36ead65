//! Occurrence counting by one or two record fields.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::extract::{Field, Record};

/// Occurrence counts keyed by field value (or value pair).
///
/// Entries are kept in the order their key was first counted; lookups go
/// through a hash index into that list.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Count one more occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, if it was ever seen.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

// The index is derived from `entries`, so equality only looks at the entries.
impl<K: PartialEq> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for FrequencyTable<K> {}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

/// Distinct values observed for one field.
pub fn distinct_values(records: &[Record], field: Field) -> BTreeSet<String> {
    records
        .iter()
        .map(|record| record.get(field).to_string())
        .collect()
}

/// Number of records per distinct value of `field`.
pub fn frequency(records: &[Record], field: Field) -> FrequencyTable<String> {
    records
        .iter()
        .map(|record| record.get(field).to_string())
        .collect()
}

/// Number of records per distinct `(a, b)` pair, taken from the same record.
pub fn pair_frequency(records: &[Record], a: Field, b: Field) -> FrequencyTable<(String, String)> {
    records
        .iter()
        .map(|record| (record.get(a).to_string(), record.get(b).to_string()))
        .collect()
}
