use std::path::PathBuf;
use thiserror::Error;

use crate::kmer_graph::NodeId;

/// Errors raised while building or consuming the k-mer graph
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Input/Output error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A node id was looked up that is not in the arena. Always an internal bug.
    #[error("Invariant violation: node {id} is not present in the graph")]
    InvariantViolation { id: NodeId },
}

impl AssemblyError {
    pub fn configuration(message: impl Into<String>) -> Self {
        AssemblyError::Configuration {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssemblyError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
