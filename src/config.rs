use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, Result};

pub const DEFAULT_KMER_SIZE: usize = 25;
pub const DEFAULT_MAX_CONTIGS: usize = 20;

/// Parameters of one assembly run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// k-mer (window) length
    pub k: usize,
    /// Upper bound on the number of contigs emitted
    pub max_contigs: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_KMER_SIZE,
            max_contigs: DEFAULT_MAX_CONTIGS,
        }
    }
}

impl AssemblyConfig {
    pub fn new(k: usize, max_contigs: usize) -> Self {
        Self { k, max_contigs }
    }

    /// Reject settings no graph can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(AssemblyError::configuration("k-mer size must be at least 1"));
        }
        Ok(())
    }
}
