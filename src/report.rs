use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::AssemblyConfig;
use crate::error::{AssemblyError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContigRecord {
    pub name: String,
    pub length: usize,
}

/// Machine-readable summary of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblySummary {
    pub config: AssemblyConfig,
    pub initial_nodes: usize,
    pub contigs: Vec<ContigRecord>,
    pub total_length: usize,
    pub longest: usize,
}

impl AssemblySummary {
    pub fn new(config: AssemblyConfig, initial_nodes: usize, contigs: &[String]) -> Self {
        let contigs: Vec<ContigRecord> = contigs
            .iter()
            .enumerate()
            .map(|(i, c)| ContigRecord {
                name: format!("contig_{}", i),
                length: c.chars().count(),
            })
            .collect();
        let total_length = contigs.iter().map(|c| c.length).sum();
        let longest = contigs.iter().map(|c| c.length).max().unwrap_or(0);
        Self {
            config,
            initial_nodes,
            contigs,
            total_length,
            longest,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| AssemblyError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| AssemblyError::io(path, e.into()))?;
        writer.flush().map_err(|e| AssemblyError::io(path, e))
    }
}
