use ahash::{AHashMap, AHashSet};

use crate::depth::VisitState;
use crate::error::{AssemblyError, Result};
use crate::sequence::reverse_complement;

/// Stable arena index of a node. Ids are handed out in creation order and never reused.
pub type NodeId = usize;

/// A k-mer vertex of the de Bruijn graph
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) kmer: String,
    /// Number of arc endpoints this k-mer has been inserted as
    pub(crate) count: usize,
    pub(crate) children: AHashSet<NodeId>,
    // Traversal state, only meaningful right after `compute_all`
    pub(crate) state: VisitState,
    pub(crate) depth: usize,
    pub(crate) max_depth_child: Option<NodeId>,
}

impl Node {
    fn new(kmer: String) -> Self {
        Node {
            kmer,
            count: 0,
            children: AHashSet::new(),
            state: VisitState::Unvisited,
            depth: 0,
            max_depth_child: None,
        }
    }

    pub fn kmer(&self) -> &str {
        &self.kmer
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Successor ids; every one of them is live
    pub fn children(&self) -> &AHashSet<NodeId> {
        &self.children
    }

    /// Longest downstream path length from the last depth pass
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Next hop on the longest downstream path, `None` at the end of a path
    pub fn max_depth_child(&self) -> Option<NodeId> {
        self.max_depth_child
    }

    pub(crate) fn reset(&mut self) {
        self.state = VisitState::Unvisited;
        self.depth = 0;
        self.max_depth_child = None;
    }
}

/// Arena-backed de Bruijn graph over fixed-length k-mers.
///
/// Slot `i` of the arena holds the node with id `i` while it is live and `None`
/// once it has been deleted, so iterating the arena yields live nodes in
/// ascending id order.
pub struct KmerGraph {
    k: usize,
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) kmer_to_id: AHashMap<String, NodeId>,
    live: usize,
    arcs_inserted: usize,
}

impl KmerGraph {
    pub fn new(k: usize) -> Self {
        KmerGraph {
            k,
            nodes: Vec::new(),
            kmer_to_id: AHashMap::new(),
            live: 0,
            arcs_inserted: 0,
        }
    }

    /// Build the graph from every read of every group, both strands.
    ///
    /// Fails before creating any node if `k` is zero or if no read is at least `k` long.
    pub fn build<S: AsRef<str>>(read_groups: &[Vec<S>], k: usize) -> Result<Self> {
        if k == 0 {
            return Err(AssemblyError::configuration("k-mer size must be at least 1"));
        }
        let usable = read_groups
            .iter()
            .flatten()
            .any(|read| read.as_ref().chars().count() >= k);
        if !usable {
            return Err(AssemblyError::configuration(format!(
                "no input read is at least k={} bases long",
                k
            )));
        }

        let mut graph = KmerGraph::new(k);
        for group in read_groups {
            for read in group {
                graph.add_read(read.as_ref());
            }
        }
        Ok(graph)
    }

    /// Insert the overlap arcs of one read and of its reverse complement.
    /// Reads shorter than `k` are skipped.
    pub fn add_read(&mut self, read: &str) {
        let forward = kmer_windows(read, self.k);
        if forward.is_empty() {
            return;
        }
        let rc = reverse_complement(read);
        let reverse = kmer_windows(&rc, self.k);
        for (fwd, rev) in forward.windows(2).zip(reverse.windows(2)) {
            self.insert_arc(fwd[0], fwd[1]);
            self.insert_arc(rev[0], rev[1]);
        }
    }

    /// Add the arc `kmer1 -> kmer2`, creating missing nodes and bumping both counts.
    pub fn insert_arc(&mut self, kmer1: &str, kmer2: &str) {
        let from = self.add_node(kmer1);
        let to = self.add_node(kmer2);
        if let Some(node) = self.nodes[from].as_mut() {
            node.children.insert(to);
        }
        self.arcs_inserted += 1;
    }

    fn add_node(&mut self, kmer: &str) -> NodeId {
        let id = match self.kmer_to_id.get(kmer) {
            Some(&id) => id,
            None => {
                let id = self.nodes.len();
                self.kmer_to_id.insert(kmer.to_string(), id);
                self.nodes.push(Some(Node::new(kmer.to_string())));
                self.live += 1;
                id
            }
        };
        if let Some(node) = self.nodes[id].as_mut() {
            node.count += 1;
        }
        id
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total arc insertions so far, duplicates included
    pub fn arcs_inserted(&self) -> usize {
        self.arcs_inserted
    }

    /// Number of distinct edges between live nodes
    pub fn edge_count(&self) -> usize {
        self.iter().map(|(_, node)| node.children.len()).sum()
    }

    /// One past the largest id ever assigned
    pub(crate) fn id_bound(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id), Some(Some(_)))
    }

    pub fn id_of(&self, kmer: &str) -> Option<NodeId> {
        self.kmer_to_id.get(kmer).copied()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .and_then(Option::as_ref)
            .ok_or(AssemblyError::InvariantViolation { id })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(AssemblyError::InvariantViolation { id })
    }

    /// Live nodes in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|node| (id, node)))
    }

    pub fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Remove a node from the arena and the k-mer index.
    /// Edges pointing at it are left alone; callers prune those first.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        let node = self
            .nodes
            .get_mut(id)
            .and_then(Option::take)
            .ok_or(AssemblyError::InvariantViolation { id })?;
        self.kmer_to_id.remove(&node.kmer);
        self.live -= 1;
        Ok(node)
    }
}

/// All length-`k` windows of `seq`, measured in characters. Empty when `seq` is shorter than `k`.
pub fn kmer_windows(seq: &str, k: usize) -> Vec<&str> {
    if k == 0 {
        return Vec::new();
    }
    if seq.is_ascii() {
        if seq.len() < k {
            return Vec::new();
        }
        return (0..=seq.len() - k).map(|i| &seq[i..i + k]).collect();
    }
    // Non-ASCII input: slice on char boundaries
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let chars = bounds.len() - 1;
    if chars < k {
        return Vec::new();
    }
    (0..=chars - k).map(|i| &seq[bounds[i]..bounds[i + k]]).collect()
}
