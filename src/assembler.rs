use tracing::{debug, info};

use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::kmer_graph::KmerGraph;

/// Greedy contig extraction over a k-mer graph that is built once and then only shrinks.
pub struct ContigAssembler {
    graph: KmerGraph,
    config: AssemblyConfig,
    initial_nodes: usize,
}

impl ContigAssembler {
    pub fn new<S: AsRef<str>>(read_groups: &[Vec<S>], config: AssemblyConfig) -> Result<Self> {
        config.validate()?;
        let total_reads: usize = read_groups.iter().map(Vec::len).sum();
        info!(
            "Building k-mer graph (k={}) from {} reads in {} groups",
            config.k,
            total_reads,
            read_groups.len()
        );
        let graph = KmerGraph::build(read_groups, config.k)?;
        info!(
            "Graph has {} nodes and {} edges ({} arcs inserted)",
            graph.len(),
            graph.edge_count(),
            graph.arcs_inserted()
        );
        Ok(Self::from_graph(graph, config))
    }

    pub fn from_graph(graph: KmerGraph, config: AssemblyConfig) -> Self {
        let initial_nodes = graph.len();
        Self {
            graph,
            config,
            initial_nodes,
        }
    }

    pub fn graph(&self) -> &KmerGraph {
        &self.graph
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Live node count right after construction
    pub fn initial_nodes(&self) -> usize {
        self.initial_nodes
    }

    /// Extract the current longest path as a contig and delete it from the graph.
    ///
    /// Returns `None` once the graph is exhausted.
    pub fn next_contig(&mut self) -> Result<Option<String>> {
        self.graph.compute_all()?;
        let path = self.graph.longest_path()?;
        if path.is_empty() {
            return Ok(None);
        }
        let contig = self.graph.concat_path(&path)?;
        self.graph.delete_path(&path)?;
        Ok(Some(contig))
    }

    /// Run the extraction loop until `max_contigs` contigs are emitted or the graph runs dry.
    pub fn assemble(&mut self) -> Result<Vec<String>> {
        let mut contigs = Vec::new();
        for i in 0..self.config.max_contigs {
            match self.next_contig()? {
                Some(contig) => {
                    info!("contig_{}: {} bp", i, contig.chars().count());
                    contigs.push(contig);
                }
                None => {
                    debug!("Graph exhausted after {} contigs", i);
                    break;
                }
            }
        }
        info!(
            "Assembled {} contigs, {} nodes left in graph",
            contigs.len(),
            self.graph.len()
        );
        Ok(contigs)
    }
}

/// Build the graph from `read_groups` and extract up to `config.max_contigs` contigs.
pub fn assemble<S: AsRef<str>>(read_groups: &[Vec<S>], config: AssemblyConfig) -> Result<Vec<String>> {
    ContigAssembler::new(read_groups, config)?.assemble()
}
