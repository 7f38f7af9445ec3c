pub mod assembler;
pub mod config;
pub mod depth;
pub mod error;
pub mod fasta;
pub mod kmer_graph;
pub mod path;
pub mod prune;
pub mod report;
pub mod sequence;

pub use assembler::{assemble, ContigAssembler};
pub use config::{AssemblyConfig, DEFAULT_KMER_SIZE, DEFAULT_MAX_CONTIGS};
pub use error::{AssemblyError, Result};
pub use fasta::{load_dataset, read_reads, write_contigs, write_contigs_to_path};
pub use kmer_graph::{KmerGraph, Node, NodeId};
pub use report::AssemblySummary;
pub use sequence::reverse_complement;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "dbgrush", version, about = "Greedy de Bruijn graph contig assembly")]
pub struct Args {
    /// Dataset directory holding short_1.fasta, short_2.fasta and long.fasta
    pub dataset: PathBuf,
    /// Output FASTA file [default: <dataset>/contig.fasta]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// k-mer size
    #[arg(short = 'k', long = "kmer-size", default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,
    /// Maximum number of contigs to emit
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_CONTIGS)]
    pub max_contigs: usize,
    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> AssemblyConfig {
        AssemblyConfig::new(self.kmer_size, self.max_contigs)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dataset.join("contig.fasta"))
    }
}

/// Load a dataset, assemble it and write the contigs (and optional summary).
pub fn run_assembler(args: &Args) -> anyhow::Result<Vec<String>> {
    let config = args.config();
    let read_groups = load_dataset(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;

    let mut assembler =
        ContigAssembler::new(&read_groups, config).context("failed to build k-mer graph")?;
    let contigs = assembler.assemble().context("assembly failed")?;

    let output = args.output_path();
    write_contigs_to_path(&output, &contigs)?;

    if let Some(summary_path) = &args.summary {
        AssemblySummary::new(config, assembler.initial_nodes(), &contigs)
            .write_json(summary_path)
            .with_context(|| format!("failed to write summary {}", summary_path.display()))?;
    }
    Ok(contigs)
}
