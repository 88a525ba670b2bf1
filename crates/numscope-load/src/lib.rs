//! Binary dataset I/O for numscope.
//!
//! This crate reads and writes the flat binary files numscope analyzes, and
//! can synthesize a dataset when none exists yet.
//!
//! # File format
//!
//! Every value is a little-endian `i32`, packed without padding. Two framings
//! are supported (see [`Framing`]):
//!
//! - **Counted** - a 4-byte `i32` element count, then exactly that many values
//! - **Raw** - the whole file is values; the count is derived from its length
//!
//! # Example
//!
//! ```rust,no_run
//! use numscope_load::{BinaryLoader, LoadConfig};
//!
//! let config = LoadConfig::new("data.bin");
//! let dataset = BinaryLoader::new().load(&config).unwrap();
//!
//! println!("Loaded {} values", dataset.len());
//! ```
//!
//! # Synthetic data
//!
//! ```rust
//! use numscope_load::{SyntheticConfig, SyntheticGenerator};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let values = SyntheticGenerator::new(SyntheticConfig::default())
//!     .generate(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(values.len(), 200);
//! assert!(values.iter().all(|v| (0..=999).contains(v)));
//! ```

mod reader;
mod synth;
mod writer;

pub use reader::BinaryLoader;
pub use synth::SyntheticGenerator;
pub use writer::BinaryWriter;

// Re-export core types for convenience
pub use numscope_core::{
    Dataset, Framing, LoadConfig, LoadConfigBuilder, LoadError, SyntheticConfig,
    SyntheticConfigBuilder,
};

/// Size in bytes of one encoded value (and of the count header).
pub const RECORD_SIZE: usize = 4;
