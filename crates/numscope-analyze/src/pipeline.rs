//! Runs a fixed sequence of analyzers over one dataset.

use std::time::Instant;

use derive_builder::Builder;
use rand::Rng;

use numscope_core::Dataset;

use crate::analyzer::{AnalysisKind, AnalysisReport, Analyzer};
use crate::duplicates::{DuplicateConfig, DuplicatesAnalyzer};
use crate::missing::{MissingAnalyzer, MissingConfig};
use crate::search::{SearchAnalyzer, SearchConfig};
use crate::statistics::StatisticsAnalyzer;

/// Which analyses to run and how each is configured.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct PipelineConfig {
    /// Analyses to run. Execution always follows [`AnalysisKind`] order,
    /// whatever order they are listed in here.
    #[builder(default = "AnalysisKind::all()")]
    pub kinds: Vec<AnalysisKind>,

    #[builder(default)]
    pub duplicates: DuplicateConfig,

    #[builder(default)]
    pub missing: MissingConfig,

    #[builder(default)]
    pub search: SearchConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            kinds: AnalysisKind::all(),
            duplicates: DuplicateConfig::default(),
            missing: MissingConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// An ordered collection of analyzers, each owning its own dataset copy.
#[derive(Default)]
pub struct AnalysisPipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalysisPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// All four analyses with default settings, in default order.
    pub fn standard<R: Rng + 'static>(dataset: &Dataset, rng: R) -> Self {
        Self::from_config(dataset, rng, &PipelineConfig::default())
    }

    /// Build the analyzers selected by `config`. Each one snapshots `dataset`
    /// independently; `rng` goes to the search analyzer.
    pub fn from_config<R: Rng + 'static>(
        dataset: &Dataset,
        rng: R,
        config: &PipelineConfig,
    ) -> Self {
        let mut pipeline = Self::new();
        let mut rng = Some(rng);

        for kind in AnalysisKind::all() {
            if !config.kinds.contains(&kind) {
                continue;
            }
            let analyzer: Box<dyn Analyzer> = match kind {
                AnalysisKind::Duplicates => Box::new(DuplicatesAnalyzer::with_config(
                    dataset,
                    config.duplicates.clone(),
                )),
                AnalysisKind::Missing => {
                    Box::new(MissingAnalyzer::with_config(dataset, config.missing.clone()))
                }
                AnalysisKind::Search => match rng.take() {
                    Some(rng) => Box::new(SearchAnalyzer::with_config(
                        dataset,
                        rng,
                        config.search.clone(),
                    )),
                    None => continue,
                },
                AnalysisKind::Statistics => Box::new(StatisticsAnalyzer::new(dataset)),
            };
            pipeline.push(analyzer);
        }

        pipeline
    }

    /// Append an analyzer.
    pub fn push(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Kinds of the queued analyzers, in execution order.
    pub fn kinds(&self) -> Vec<AnalysisKind> {
        self.analyzers.iter().map(|a| a.kind()).collect()
    }

    /// Number of queued analyzers.
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Check if no analyzers are queued.
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Run every analyzer in order and collect the reports.
    pub fn run(&mut self) -> Vec<AnalysisReport> {
        self.analyzers
            .iter_mut()
            .map(|analyzer| {
                let kind = analyzer.kind();
                let _span = tracing::debug_span!("analyze", %kind).entered();
                let start = Instant::now();

                let report = analyzer.analyze();

                tracing::debug!(
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "analysis finished"
                );
                report
            })
            .collect()
    }
}
