//! Duplicate value detection.
//!
//! Counts every distinct value with a [`FrequencyTable`] and keeps those
//! occurring more than once, in ascending value order. The dataset does not
//! need to be sorted for this, so the snapshot is left untouched.

use std::fmt;

use derive_builder::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use numscope_core::{Dataset, FrequencyTable};

use crate::analyzer::{AnalysisKind, AnalysisReport, Analyzer};
use crate::format::write_limited;

/// Configuration for duplicate detection.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct DuplicateConfig {
    /// Maximum number of duplicated values to list in the text report
    /// (0 = unlimited). The structured report always holds all of them.
    #[builder(default = "0")]
    #[serde(default)]
    pub max_listed: usize,
}

impl DuplicateConfig {
    /// Create a new config builder.
    pub fn builder() -> DuplicateConfigBuilder {
        DuplicateConfigBuilder::default()
    }
}

/// A value that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateValue {
    /// The repeated value.
    pub value: i32,
    /// Total number of occurrences (always at least 2).
    pub count: usize,
}

impl DuplicateValue {
    /// Occurrences beyond the first.
    pub fn extra(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

/// Results from duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// Number of values analyzed.
    pub values_analyzed: usize,

    /// Duplicated values, ascending by value.
    pub duplicates: Vec<DuplicateValue>,

    #[serde(skip)]
    max_listed: usize,
}

impl DuplicateReport {
    /// Check if any duplicates were found.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Total redundant occurrences, i.e. equal adjacent pairs once sorted.
    pub fn extra_occurrences(&self) -> usize {
        self.duplicates.iter().map(DuplicateValue::extra).sum()
    }

    /// Occurrence count of `value` if it is duplicated.
    pub fn count_of(&self, value: i32) -> Option<usize> {
        self.duplicates
            .binary_search_by_key(&value, |d| d.value)
            .ok()
            .map(|idx| self.duplicates[idx].count)
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values_analyzed == 0 {
            return write!(f, "Duplicates: none");
        }

        write!(f, "Duplicates (value:count): ")?;
        if self.duplicates.is_empty() {
            return write!(f, "none");
        }
        let items = self
            .duplicates
            .iter()
            .map(|d| format!("{}:{}", d.value, d.count))
            .collect_vec();
        write_limited(f, &items, items.len() as u64, self.max_listed)
    }
}

/// Finds values that occur more than once.
#[derive(Debug, Clone)]
pub struct DuplicatesAnalyzer {
    dataset: Dataset,
    config: DuplicateConfig,
}

impl DuplicatesAnalyzer {
    /// Create an analyzer over a private copy of `dataset`.
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_config(dataset, DuplicateConfig::default())
    }

    /// Create an analyzer with custom config.
    pub fn with_config(dataset: &Dataset, config: DuplicateConfig) -> Self {
        Self {
            dataset: dataset.snapshot(),
            config,
        }
    }

    /// The analyzer's private copy of the data.
    pub fn values(&self) -> &[i32] {
        self.dataset.as_slice()
    }

    /// Find all duplicated values.
    pub fn find_duplicates(&self) -> DuplicateReport {
        let table = FrequencyTable::from_values(self.dataset.as_slice());
        let duplicates = table
            .repeated()
            .map(|(value, count)| DuplicateValue { value, count })
            .collect_vec();

        tracing::debug!(
            values = self.dataset.len(),
            distinct = table.distinct(),
            duplicated = duplicates.len(),
            "duplicate scan complete"
        );

        DuplicateReport {
            values_analyzed: self.dataset.len(),
            duplicates,
            max_listed: self.config.max_listed,
        }
    }
}

impl Analyzer for DuplicatesAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Duplicates
    }

    fn analyze(&mut self) -> AnalysisReport {
        AnalysisReport::Duplicates(self.find_duplicates())
    }
}
