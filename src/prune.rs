use bitvec::prelude::*;
use tracing::trace;

use crate::error::{AssemblyError, Result};
use crate::kmer_graph::{KmerGraph, NodeId};

impl KmerGraph {
    /// Remove every node of `path` from the graph.
    ///
    /// Edges into the path are pruned from all remaining nodes before the
    /// nodes themselves leave the arena, so no child set is left pointing at a
    /// dead id. Every id must be live.
    pub fn delete_path(&mut self, path: &[NodeId]) -> Result<()> {
        let mut dead = bitvec![0; self.id_bound()];
        for &id in path {
            if !self.contains(id) {
                return Err(AssemblyError::InvariantViolation { id });
            }
            dead.set(id, true);
        }

        let mut pruned = 0;
        for node in self.nodes.iter_mut().flatten() {
            let before = node.children.len();
            node.children.retain(|&child| !dead[child]);
            pruned += before - node.children.len();
        }

        for &id in path {
            self.remove_node(id)?;
        }
        trace!(nodes = path.len(), edges = pruned, "deleted path");
        Ok(())
    }
}
