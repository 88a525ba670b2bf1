//! Missing value detection.
//!
//! Finds every integer between the dataset's minimum and maximum that does
//! not occur in it. The snapshot is sorted, then each adjacent pair whose gap
//! exceeds one contributes the inclusive range strictly between them. Only
//! the ranges are stored, so a sparse dataset spanning the whole `i32`
//! domain does not need a presence table of billions of entries.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use numscope_core::Dataset;

use crate::analyzer::{AnalysisKind, AnalysisReport, Analyzer};
use crate::format::write_limited;
use crate::snapshot::Snapshot;

/// Configuration for missing value detection.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct MissingConfig {
    /// Maximum number of missing values to list in the text report
    /// (0 = unlimited). The structured report always holds every range.
    #[builder(default = "0")]
    #[serde(default)]
    pub max_listed: usize,
}

impl MissingConfig {
    /// Create a new config builder.
    pub fn builder() -> MissingConfigBuilder {
        MissingConfigBuilder::default()
    }
}

/// An inclusive run of consecutive missing integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRange {
    /// First missing value.
    pub start: i32,
    /// Last missing value.
    pub end: i32,
}

impl MissingRange {
    /// Number of integers in the range.
    pub fn count(&self) -> u64 {
        (i64::from(self.end) - i64::from(self.start) + 1) as u64
    }

    /// Iterate the missing values in ascending order.
    pub fn values(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// Results from missing value detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingReport {
    /// Smallest value present, or `None` for an empty dataset.
    pub min: Option<i32>,

    /// Largest value present, or `None` for an empty dataset.
    pub max: Option<i32>,

    /// Gaps in ascending order.
    pub gaps: Vec<MissingRange>,

    /// Total number of missing integers across all gaps.
    pub total_missing: u64,

    #[serde(skip)]
    max_listed: usize,
}

impl MissingReport {
    /// Check if any value in `[min, max]` is absent.
    pub fn has_missing(&self) -> bool {
        self.total_missing > 0
    }

    /// Iterate every missing value in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.gaps.iter().flat_map(MissingRange::values)
    }

    /// Check whether `value` lies in one of the gaps.
    pub fn is_missing(&self, value: i32) -> bool {
        self.gaps
            .binary_search_by(|gap| {
                if gap.end < value {
                    std::cmp::Ordering::Less
                } else if gap.start > value {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return write!(f, "Missing: none");
        };

        write!(f, "Missing values between {min} and {max}: ")?;
        if self.gaps.is_empty() {
            return write!(f, "none");
        }
        write_limited(f, self.values(), self.total_missing, self.max_listed)
    }
}

/// Finds the integers absent between a dataset's minimum and maximum.
#[derive(Debug, Clone)]
pub struct MissingAnalyzer {
    snapshot: Snapshot,
    config: MissingConfig,
}

impl MissingAnalyzer {
    /// Create an analyzer over a private copy of `dataset`.
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_config(dataset, MissingConfig::default())
    }

    /// Create an analyzer with custom config.
    pub fn with_config(dataset: &Dataset, config: MissingConfig) -> Self {
        Self {
            snapshot: Snapshot::of(dataset),
            config,
        }
    }

    /// The analyzer's private copy of the data, in its current order.
    pub fn values(&self) -> &[i32] {
        self.snapshot.values()
    }

    /// Sort the private copy and locate every gap.
    pub fn find_missing(&mut self) -> MissingReport {
        let sorted = self.snapshot.sorted();

        let gaps: Vec<MissingRange> = sorted
            .adjacent_pairs()
            .filter(|&(prev, next)| i64::from(next) - i64::from(prev) > 1)
            .map(|(prev, next)| MissingRange {
                start: prev + 1,
                end: next - 1,
            })
            .collect();
        let total_missing = gaps.iter().map(MissingRange::count).sum();

        tracing::debug!(
            values = sorted.len(),
            gaps = gaps.len(),
            total_missing,
            "gap scan complete"
        );

        MissingReport {
            min: sorted.min(),
            max: sorted.max(),
            gaps,
            total_missing,
            max_listed: self.config.max_listed,
        }
    }
}

impl Analyzer for MissingAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Missing
    }

    fn analyze(&mut self) -> AnalysisReport {
        AnalysisReport::Missing(self.find_missing())
    }
}
