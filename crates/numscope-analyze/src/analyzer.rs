//! The analyzer capability and the reports analyzers produce.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::duplicates::DuplicateReport;
use crate::missing::MissingReport;
use crate::search::SearchReport;
use crate::statistics::StatisticsReport;

/// The kinds of analysis available, in their default execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisKind {
    Duplicates,
    Missing,
    Search,
    Statistics,
}

impl AnalysisKind {
    /// All kinds in default execution order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Heading printed above this kind's report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Duplicates => "Duplicates analysis",
            Self::Missing => "Missing analysis",
            Self::Search => "Search analysis",
            Self::Statistics => "Statistics analysis",
        }
    }
}

/// Result of one [`Analyzer::analyze`] call.
///
/// The `Display` output is the human-readable report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisReport {
    Duplicates(DuplicateReport),
    Missing(MissingReport),
    Search(SearchReport),
    Statistics(StatisticsReport),
}

impl AnalysisReport {
    /// Which analysis produced this report.
    pub fn kind(&self) -> AnalysisKind {
        match self {
            Self::Duplicates(_) => AnalysisKind::Duplicates,
            Self::Missing(_) => AnalysisKind::Missing,
            Self::Search(_) => AnalysisKind::Search,
            Self::Statistics(_) => AnalysisKind::Statistics,
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicates(report) => report.fmt(f),
            Self::Missing(report) => report.fmt(f),
            Self::Search(report) => report.fmt(f),
            Self::Statistics(report) => report.fmt(f),
        }
    }
}

/// Something that turns its private dataset snapshot into a report.
///
/// Implementors own their data exclusively, so `analyze` may sort or
/// otherwise rearrange it without affecting any other analyzer.
pub trait Analyzer {
    /// The kind of analysis performed.
    fn kind(&self) -> AnalysisKind;

    /// Run the analysis.
    fn analyze(&mut self) -> AnalysisReport;
}
