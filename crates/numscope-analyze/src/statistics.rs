//! Summary statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use numscope_core::{Dataset, SortedDataset};

use crate::analyzer::{AnalysisKind, AnalysisReport, Analyzer};
use crate::snapshot::Snapshot;

/// Min, max, mean, median and mode of a non-empty dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    pub median: f64,
    /// Value with the longest run; the earliest such value on ties.
    pub mode: i32,
    /// Number of occurrences of `mode`.
    pub mode_count: usize,
}

impl Summary {
    /// Compute the summary of a sorted dataset, or `None` when it is empty.
    pub fn of(sorted: &SortedDataset) -> Option<Self> {
        let values = sorted.as_slice();
        let (&min, &max) = (values.first()?, values.last()?);
        let n = values.len();

        let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
        let mean = sum as f64 / n as f64;

        let median = if n % 2 == 1 {
            f64::from(values[n / 2])
        } else {
            (f64::from(values[n / 2 - 1]) + f64::from(values[n / 2])) / 2.0
        };

        // Strict `>` keeps the first run seen when lengths tie.
        let mut runs = sorted.runs();
        let (mut mode, mut mode_count) = runs.next()?;
        for (value, len) in runs {
            if len > mode_count {
                mode = value;
                mode_count = len;
            }
        }

        Some(Self {
            min,
            max,
            mean,
            median,
            mode,
            mode_count,
        })
    }
}

/// Results from statistical analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Number of values analyzed.
    pub count: usize,
    /// Summary, absent for an empty dataset.
    pub summary: Option<Summary>,
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.summary {
            None => write!(f, "No data"),
            Some(s) => write!(
                f,
                "Min={}, Max={}, Mean={}, Median={}, Mode={} (count={})",
                s.min, s.max, s.mean, s.median, s.mode, s.mode_count
            ),
        }
    }
}

/// Computes summary statistics over a private, sorted copy of the data.
#[derive(Debug, Clone)]
pub struct StatisticsAnalyzer {
    snapshot: Snapshot,
}

impl StatisticsAnalyzer {
    /// Create an analyzer over a private copy of `dataset`.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            snapshot: Snapshot::of(dataset),
        }
    }

    /// The analyzer's private copy of the data, in its current order.
    pub fn values(&self) -> &[i32] {
        self.snapshot.values()
    }

    /// Sort the private copy and summarize it.
    pub fn summarize(&mut self) -> StatisticsReport {
        let sorted = self.snapshot.sorted();
        let summary = Summary::of(sorted);

        tracing::debug!(values = sorted.len(), ?summary, "statistics computed");

        StatisticsReport {
            count: sorted.len(),
            summary,
        }
    }
}

impl Analyzer for StatisticsAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Statistics
    }

    fn analyze(&mut self) -> AnalysisReport {
        AnalysisReport::Statistics(self.summarize())
    }
}
