use crate::error::Result;
use crate::kmer_graph::{KmerGraph, NodeId};

/// Per-node traversal state of the depth pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// Being explored; its depth is not final yet
    OnStack,
    Finalized,
}

struct Frame {
    id: NodeId,
    children: Vec<NodeId>,
    next: usize,
}

impl KmerGraph {
    /// Clear depth, next-hop and visit state on every live node.
    pub fn reset_traversal(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            node.reset();
        }
    }

    /// Children of `id` by descending count, ties broken by ascending id.
    pub fn sorted_children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.node(id)?;
        let mut keyed = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            keyed.push((self.node(child)?.count, child));
        }
        keyed.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        Ok(keyed.into_iter().map(|(_, child)| child).collect())
    }

    /// Compute depth and best next hop for every live node.
    ///
    /// `depth(v) = 1 + max(depth(c))` over the children of `v`. A child that is
    /// still on the stack when reached (a back edge) is not entered; it
    /// contributes whatever depth it currently holds, which is 0 after the reset.
    /// The walk uses an explicit stack since paths can be as long as the genome.
    pub fn compute_all(&mut self) -> Result<()> {
        self.reset_traversal();
        let starts: Vec<NodeId> = self.live_ids().collect();
        for start in starts {
            if self.node(start)?.state == VisitState::Finalized {
                continue;
            }
            self.compute_from(start)?;
        }
        Ok(())
    }

    fn compute_from(&mut self, start: NodeId) -> Result<()> {
        let mut stack = vec![self.enter(start)?];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.children.get(frame.next) {
                frame.next += 1;
                if self.node(child)?.state == VisitState::Unvisited {
                    let next = self.enter(child)?;
                    stack.push(next);
                }
                continue;
            }

            let id = frame.id;
            let children = std::mem::take(&mut frame.children);
            stack.pop();
            self.finalize(id, &children)?;
        }
        Ok(())
    }

    fn enter(&mut self, id: NodeId) -> Result<Frame> {
        let children = self.sorted_children(id)?;
        self.node_mut(id)?.state = VisitState::OnStack;
        Ok(Frame {
            id,
            children,
            next: 0,
        })
    }

    fn finalize(&mut self, id: NodeId, children: &[NodeId]) -> Result<()> {
        let mut best_depth = 0;
        let mut best_child = None;
        for &child in children {
            let depth = self.node(child)?.depth;
            // Strictly greater only: earlier children in sort order win ties
            if depth > best_depth {
                best_depth = depth;
                best_child = Some(child);
            }
        }

        let node = self.node_mut(id)?;
        node.depth = best_depth + 1;
        node.max_depth_child = best_child;
        node.state = VisitState::Finalized;
        Ok(())
    }
}
