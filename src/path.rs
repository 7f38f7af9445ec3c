use crate::error::{AssemblyError, Result};
use crate::kmer_graph::{KmerGraph, NodeId};

impl KmerGraph {
    /// Walk the longest path found by the last `compute_all`.
    ///
    /// The start is the first live node (ascending id) holding the maximum depth;
    /// from there the stored next hops are followed to the end. Empty when the
    /// graph has no live nodes.
    pub fn longest_path(&self) -> Result<Vec<NodeId>> {
        let mut max_depth = 0;
        let mut start = None;
        for (id, node) in self.iter() {
            if node.depth() > max_depth {
                max_depth = node.depth();
                start = Some(id);
            }
        }

        let mut path = Vec::with_capacity(max_depth);
        let mut current = start;
        while let Some(id) = current {
            path.push(id);
            current = self.node(id)?.max_depth_child();
        }
        Ok(path)
    }

    /// Spell out the sequence of a path: the first k-mer in full, then the
    /// last base of each following k-mer.
    pub fn concat_path(&self, path: &[NodeId]) -> Result<String> {
        let Some((&first, rest)) = path.split_first() else {
            return Ok(String::new());
        };
        let mut contig = String::with_capacity(self.k() + rest.len());
        contig.push_str(&self.node(first)?.kmer);
        for &id in rest {
            let last = self
                .node(id)?
                .kmer
                .chars()
                .last()
                .ok_or(AssemblyError::InvariantViolation { id })?;
            contig.push(last);
        }
        Ok(contig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer_graph::kmer_windows;

    #[test]
    fn test_empty_graph_gives_empty_path() {
        let mut graph = KmerGraph::new(5);
        graph.compute_all().unwrap();
        assert!(graph.longest_path().unwrap().is_empty());
        assert_eq!(graph.concat_path(&[]).unwrap(), "");
    }

    #[test]
    fn test_first_maximum_wins() {
        let mut graph = KmerGraph::new(4);
        graph.add_read("AAAACCCC");
        graph.compute_all().unwrap();
        // AAAA (id 0) and GGGG (id 2) both have depth 5
        let path = graph.longest_path().unwrap();
        assert_eq!(path.first(), graph.id_of("AAAA").as_ref());
        assert_eq!(path.len(), 5);
        assert_eq!(graph.concat_path(&path).unwrap(), "AAAACCCC");
    }

    #[test]
    fn test_contig_windows_match_path() {
        let k = 5;
        let mut graph = KmerGraph::new(k);
        graph.add_read("GATTACAGATTCCAGGTACCA");
        graph.add_read("CCAGGTACCATTGAC");
        graph.compute_all().unwrap();

        let path = graph.longest_path().unwrap();
        assert!(!path.is_empty());
        let contig = graph.concat_path(&path).unwrap();
        assert_eq!(contig.len(), k + path.len() - 1);

        let windows = kmer_windows(&contig, k);
        assert_eq!(windows.len(), path.len());
        for (window, &id) in windows.iter().zip(&path) {
            assert_eq!(*window, graph.node(id).unwrap().kmer);
        }
    }

    #[test]
    fn test_path_follows_cycle_once() {
        let mut graph = KmerGraph::new(1);
        graph.insert_arc("A", "B");
        graph.insert_arc("B", "C");
        graph.insert_arc("C", "A");
        graph.compute_all().unwrap();
        let path = graph.longest_path().unwrap();
        assert_eq!(graph.concat_path(&path).unwrap(), "ABC");
    }

    #[test]
    fn test_concat_unknown_id_fails() {
        let graph = KmerGraph::new(3);
        assert!(matches!(
            graph.concat_path(&[4]),
            Err(AssemblyError::InvariantViolation { id: 4 })
        ));
    }
}
