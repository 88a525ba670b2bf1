//! Core types and primitives for numscope.
//!
//! This crate provides the data structures shared by the loader and the
//! analyzers: the owned [`Dataset`], its sorted form, the sort and search
//! engines every analyzer builds on, and load configuration and errors.

mod config;
mod dataset;
mod error;
mod frequency;
pub mod search;
pub mod sort;

pub use config::{
    Framing, LoadConfig, LoadConfigBuilder, SyntheticConfig, SyntheticConfigBuilder,
};
pub use dataset::{Dataset, Runs, SortedDataset};
pub use error::LoadError;
pub use frequency::FrequencyTable;
