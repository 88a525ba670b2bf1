//! Binary dataset reader.

use std::path::Path;
use std::time::Instant;

use rand::Rng;

use numscope_core::{Dataset, Framing, LoadConfig, LoadError};

use crate::RECORD_SIZE;
use crate::synth::SyntheticGenerator;
use crate::writer::BinaryWriter;

/// Loads datasets from binary files.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryLoader;

impl BinaryLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load the dataset described by `config`.
    ///
    /// A missing file is replaced with a synthetic dataset drawn from the
    /// thread-local RNG when `create_if_missing` is set.
    pub fn load(&self, config: &LoadConfig) -> Result<Dataset, LoadError> {
        self.load_with_rng(config, &mut rand::rng())
    }

    /// Like [`load`](Self::load), drawing any synthetic data from `rng`.
    pub fn load_with_rng<R: Rng>(
        &self,
        config: &LoadConfig,
        rng: &mut R,
    ) -> Result<Dataset, LoadError> {
        let start = Instant::now();
        let path = config.path.as_path();

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && config.create_if_missing => {
                tracing::warn!(
                    path = %path.display(),
                    "dataset file not found, creating a synthetic one"
                );
                self.create_synthetic(config, rng)?;
                std::fs::read(path).map_err(|e| LoadError::io(path, e))?
            }
            Err(e) => return Err(LoadError::io(path, e)),
        };

        let dataset = Self::decode(&bytes, config.framing, path)?;

        tracing::info!(
            path = %path.display(),
            values = dataset.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse an in-memory buffer. `origin` is only used for error context.
    pub fn decode(bytes: &[u8], framing: Framing, origin: &Path) -> Result<Dataset, LoadError> {
        let body = match framing {
            Framing::Counted => {
                let (header, body) = bytes.split_first_chunk::<RECORD_SIZE>().ok_or_else(|| {
                    LoadError::MissingHeader {
                        path: origin.to_path_buf(),
                        len: bytes.len(),
                    }
                })?;

                let count = i32::from_le_bytes(*header);
                let declared = usize::try_from(count).map_err(|_| LoadError::NegativeCount {
                    path: origin.to_path_buf(),
                    count,
                })?;

                if body.len() != declared * RECORD_SIZE {
                    return Err(LoadError::LengthMismatch {
                        path: origin.to_path_buf(),
                        declared,
                        available: body.len() / RECORD_SIZE,
                    });
                }
                body
            }
            Framing::Raw => {
                if bytes.len() % RECORD_SIZE != 0 {
                    return Err(LoadError::TrailingBytes {
                        path: origin.to_path_buf(),
                        len: bytes.len(),
                    });
                }
                bytes
            }
        };

        Ok(body
            .chunks_exact(RECORD_SIZE)
            .map(|chunk| {
                let mut record = [0u8; RECORD_SIZE];
                record.copy_from_slice(chunk);
                i32::from_le_bytes(record)
            })
            .collect())
    }

    /// Generate and write a synthetic dataset at the configured path.
    fn create_synthetic<R: Rng>(&self, config: &LoadConfig, rng: &mut R) -> Result<(), LoadError> {
        let values = SyntheticGenerator::new(config.synthetic.clone()).generate(rng)?;
        BinaryWriter::new(config.framing).write(&config.path, &values)?;

        tracing::info!(
            path = %config.path.display(),
            values = values.len(),
            "created synthetic dataset"
        );
        Ok(())
    }
}
