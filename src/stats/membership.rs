//! Distinct members per group.

use std::collections::{BTreeSet, HashMap};

use super::ranking::Ranking;
use crate::extract::{Field, Record};

/// For each group value, the distinct member values seen with it.
///
/// Groups are kept in first-seen order. The member sets are ordered so that
/// iterating them is deterministic; usually only their size matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctMembership {
    index: HashMap<String, usize>,
    groups: Vec<(String, BTreeSet<String>)>,
}

impl DistinctMembership {
    /// Members recorded for `group`.
    pub fn get(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.index.get(group).map(|&slot| &self.groups[slot].1)
    }

    /// Number of distinct members for `group`, zero when unseen.
    pub fn cardinality(&self, group: &str) -> usize {
        self.get(group).map_or(0, BTreeSet::len)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups and their members in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(group, members)| (group.as_str(), members))
    }

    /// Groups ranked by how many distinct members they have.
    pub fn top_n(&self, n: usize) -> Ranking<String> {
        Ranking::from_counts(
            self.groups
                .iter()
                .map(|(group, members)| (group.clone(), members.len())),
            n,
        )
    }

    fn insert(&mut self, group: &str, member: &str) {
        let slot = match self.index.get(group) {
            Some(&slot) => slot,
            None => {
                self.index.insert(group.to_string(), self.groups.len());
                self.groups.push((group.to_string(), BTreeSet::new()));
                self.groups.len() - 1
            }
        };
        let members = &mut self.groups[slot].1;
        if !members.contains(member) {
            members.insert(member.to_string());
        }
    }
}

/// Group records by `group_field` and collect the distinct `member_field`
/// values within each group in a single pass.
pub fn distinct_membership(
    records: &[Record],
    group_field: Field,
    member_field: Field,
) -> DistinctMembership {
    let mut membership = DistinctMembership::default();
    for record in records {
        membership.insert(record.get(group_field), record.get(member_field));
    }
    membership
}
