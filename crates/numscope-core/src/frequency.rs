//! Value frequency counting.

use std::collections::BTreeMap;

/// Occurrence count of every distinct value, ordered by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<i32, usize>,
}

impl FrequencyTable {
    /// Build a table in one pass over `values`.
    pub fn from_values(values: &[i32]) -> Self {
        let mut counts = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `value` (0 if absent).
    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(value, count)` in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&v, &c)| (v, c))
    }

    /// Iterate values occurring more than once, ascending.
    pub fn repeated(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 1)
    }
}
