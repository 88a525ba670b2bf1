//! Randomized membership search.
//!
//! Draws probe values uniformly from a fixed range and counts how many of
//! them occur in the dataset, using binary search over a copy that is sorted
//! when the analyzer is constructed.

use std::fmt;

use derive_builder::Builder;
use rand::Rng;
use serde::{Deserialize, Serialize};

use numscope_core::Dataset;

use crate::analyzer::{AnalysisKind, AnalysisReport, Analyzer};
use crate::snapshot::Snapshot;

/// Configuration for randomized search.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq, Eq)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SearchConfig {
    /// Number of independent probes.
    #[builder(default = "100")]
    pub probes: usize,

    /// Smallest probe value (inclusive).
    #[builder(default = "0")]
    pub probe_min: i32,

    /// Largest probe value (inclusive).
    #[builder(default = "999")]
    pub probe_max: i32,
}

impl SearchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let min = self.probe_min.unwrap_or(0);
        let max = self.probe_max.unwrap_or(999);
        if min > max {
            return Err(format!("probe_min ({min}) must not exceed probe_max ({max})"));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            probes: 100,
            probe_min: 0,
            probe_max: 999,
        }
    }
}

impl SearchConfig {
    /// Create a new config builder.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Results from randomized search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Number of probes drawn.
    pub probes: usize,
    /// Number of probes present in the dataset.
    pub found: usize,
    /// Smallest possible probe value.
    pub probe_min: i32,
    /// Largest possible probe value.
    pub probe_max: i32,
}

impl SearchReport {
    /// Fraction of probes that were found, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.found as f64 / self.probes as f64
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Search found {} values (out of {})",
            self.found, self.probes
        )
    }
}

/// Probes a sorted dataset with random values.
///
/// The random source is injected so callers control determinism.
#[derive(Debug, Clone)]
pub struct SearchAnalyzer<R> {
    snapshot: Snapshot,
    rng: R,
    config: SearchConfig,
}

impl<R: Rng> SearchAnalyzer<R> {
    /// Create an analyzer over a private, immediately sorted copy of `dataset`.
    pub fn new(dataset: &Dataset, rng: R) -> Self {
        Self::with_config(dataset, rng, SearchConfig::default())
    }

    /// Create an analyzer with custom config.
    pub fn with_config(dataset: &Dataset, rng: R, config: SearchConfig) -> Self {
        Self {
            snapshot: Snapshot::sorted_of(dataset),
            rng,
            config,
        }
    }

    /// The analyzer's private copy of the data (already sorted).
    pub fn values(&self) -> &[i32] {
        self.snapshot.values()
    }

    /// Draw the configured number of probes and count hits.
    pub fn probe(&mut self) -> SearchReport {
        let SearchConfig {
            probes,
            probe_min,
            probe_max,
        } = self.config;
        let sorted = self.snapshot.sorted();

        let mut found = 0;
        if probe_min <= probe_max {
            for _ in 0..probes {
                let key = self.rng.random_range(probe_min..=probe_max);
                if sorted.contains(key) {
                    found += 1;
                }
            }
        }

        tracing::debug!(values = sorted.len(), probes, found, "random search complete");

        SearchReport {
            probes,
            found,
            probe_min,
            probe_max,
        }
    }
}

impl<R: Rng> Analyzer for SearchAnalyzer<R> {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Search
    }

    fn analyze(&mut self) -> AnalysisReport {
        AnalysisReport::Search(self.probe())
    }
}
