//! Dataset container and its sorted view.

use serde::{Deserialize, Serialize};

use crate::search::binary_search;
use crate::sort::selection_sort;

/// An owned snapshot of the integers under analysis.
///
/// Values cannot be mutated through a shared `Dataset`. Analyzers take their
/// own copy with [`Dataset::snapshot`] so that sorting one copy never changes
/// what another analyzer sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    /// Create a dataset that takes ownership of `values`.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Create a dataset by copying a slice.
    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the dataset has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values in their original order.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Take an independent deep copy for exclusive use by one consumer.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Sort the values in place and return the sorted view.
    pub fn into_sorted(mut self) -> SortedDataset {
        selection_sort(&mut self.values);
        SortedDataset {
            values: self.values,
        }
    }

    /// Consume the dataset and return the underlying values.
    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i32> for Dataset {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A dataset whose values are in non-decreasing order.
///
/// Only produced by [`Dataset::into_sorted`], so `values[i] <= values[i + 1]`
/// always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedDataset {
    values: Vec<i32>,
}

impl SortedDataset {
    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the sorted values.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Smallest value, if any.
    pub fn min(&self) -> Option<i32> {
        self.values.first().copied()
    }

    /// Largest value, if any.
    pub fn max(&self) -> Option<i32> {
        self.values.last().copied()
    }

    /// Membership test via binary search.
    pub fn contains(&self, key: i32) -> bool {
        binary_search(&self.values, &key)
    }

    /// Iterate over runs of equal consecutive values as `(value, run_length)`.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            values: &self.values,
        }
    }

    /// Iterate over adjacent pairs `(previous, next)`.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.values.windows(2).map(|w| (w[0], w[1]))
    }

    /// Return to an unordered dataset, keeping the current order.
    pub fn into_dataset(self) -> Dataset {
        Dataset::new(self.values)
    }
}

/// Iterator over runs of equal values in a [`SortedDataset`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    values: &'a [i32],
}

impl Iterator for Runs<'_> {
    type Item = (i32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (&first, _) = self.values.split_first()?;
        let len = self
            .values
            .iter()
            .position(|&v| v != first)
            .unwrap_or(self.values.len());
        self.values = &self.values[len..];
        Some((first, len))
    }
}
