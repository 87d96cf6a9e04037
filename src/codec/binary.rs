//! Binary index codec
//!
//! Serializes the whole index as a single bincode blob. Fastest and most
//! compact of the three formats, and the only one with full type fidelity;
//! used as the production source of truth.

use super::IndexCodec;
use crate::error::{EngineError, Result, Section};
use crate::index::InvertedIndex;
use std::fs;
use std::path::Path;

/// Bincode blob codec
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl IndexCodec for BinaryCodec {
    fn save(&self, index: &InvertedIndex, path: &Path) -> Result<()> {
        let bytes = bincode::serialize(index)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "binary index saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<InvertedIndex> {
        let bytes = fs::read(path)?;
        // The blob is one undifferentiated structure, so any decode failure
        // is reported against the index body.
        let index: InvertedIndex = bincode::deserialize(&bytes).map_err(|e| {
            EngineError::corrupt(Section::IndexBody, format!("decode failed: {e}"))
        })?;
        tracing::info!(
            path = %path.display(),
            num_docs = index.num_docs(),
            unique_terms = index.num_unique_terms(),
            "binary index loaded"
        );
        Ok(index)
    }
}
