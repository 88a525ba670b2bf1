//! Binary dataset writer.

use std::path::Path;

use numscope_core::{Framing, LoadError};

use crate::RECORD_SIZE;

/// Writes datasets in the numscope binary format.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryWriter {
    framing: Framing,
}

impl BinaryWriter {
    /// Create a writer for the given framing.
    pub fn new(framing: Framing) -> Self {
        Self { framing }
    }

    /// Encode `values` into an in-memory buffer.
    pub fn encode(&self, values: &[i32]) -> Result<Vec<u8>, LoadError> {
        let header = match self.framing {
            Framing::Counted => {
                let len = values.len();
                let count = i32::try_from(len).map_err(|_| LoadError::TooLarge { len })?;
                Some(count)
            }
            Framing::Raw => None,
        };

        let mut bytes = Vec::with_capacity((values.len() + 1) * RECORD_SIZE);
        if let Some(count) = header {
            bytes.extend_from_slice(&count.to_le_bytes());
        }
        for value in values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        Ok(bytes)
    }

    /// Encode `values` and write them to `path`, replacing any existing file.
    ///
    /// Every write failure is reported as [`LoadError::Io`], including a
    /// missing parent directory.
    pub fn write(&self, path: &Path, values: &[i32]) -> Result<(), LoadError> {
        let bytes = self.encode(values)?;
        std::fs::write(path, bytes).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            values = values.len(),
            framing = ?self.framing,
            "wrote dataset"
        );
        Ok(())
    }
}
