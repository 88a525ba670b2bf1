//! Analysis algorithms for numscope.
//!
//! This crate runs independent analyses over an integer [`Dataset`]:
//!
//! - **Duplicates** - values occurring more than once, with their counts
//! - **Missing** - integers absent between the minimum and maximum
//! - **Search** - how many random probes are present (binary search)
//! - **Statistics** - min, max, mean, median and mode
//!
//! Every analyzer takes its own snapshot of the dataset when constructed, so
//! one analyzer sorting its copy never affects another.
//!
//! # Running all analyses
//!
//! ```rust
//! use numscope_analyze::{AnalysisPipeline, Dataset};
//! use rand::SeedableRng;
//!
//! let dataset = Dataset::new(vec![1, 2, 2, 3]);
//! let rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! for report in AnalysisPipeline::standard(&dataset, rng).run() {
//!     println!("{}: {report}", report.kind().label());
//! }
//! ```
//!
//! # Single analyzer
//!
//! ```rust
//! use numscope_analyze::{Dataset, StatisticsAnalyzer};
//!
//! let dataset = Dataset::new(vec![1, 1, 2, 2]);
//! let report = StatisticsAnalyzer::new(&dataset).summarize();
//!
//! assert_eq!(report.summary.unwrap().mode, 1);
//! ```

mod analyzer;
pub mod duplicates;
mod format;
pub mod missing;
mod pipeline;
pub mod search;
mod snapshot;
pub mod statistics;

pub use analyzer::{AnalysisKind, AnalysisReport, Analyzer};
pub use duplicates::{DuplicateConfig, DuplicateReport, DuplicateValue, DuplicatesAnalyzer};
pub use missing::{MissingAnalyzer, MissingConfig, MissingRange, MissingReport};
pub use pipeline::{AnalysisPipeline, PipelineConfig, PipelineConfigBuilder};
pub use search::{SearchAnalyzer, SearchConfig, SearchReport};
pub use statistics::{StatisticsAnalyzer, StatisticsReport, Summary};

// Re-export core types
pub use numscope_core::{Dataset, FrequencyTable, SortedDataset};
