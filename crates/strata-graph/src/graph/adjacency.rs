//! Adjacency builder.
//!
//! Collapses the raw domain connections into per-node successor/predecessor sets and one
//! [`LayoutEdge`] per distinct `(source, target)` pair.

use super::{EdgeId, Graph, HashMap, LayoutEdge, NodeId, SemanticEdgeId};
use crate::error::{Error, Result};

impl<N, E> Graph<N, E> {
    /// Builds adjacency from the raw connections.
    ///
    /// Nodes are visited in id order and each node's outgoing connections in insertion order.
    /// The first connection seen for a pair creates the layout edge; later connections between
    /// the same pair are bundled into it and do not change adjacency.
    ///
    /// Fails with [`Error::AdjacencyAlreadyBuilt`] if called twice without
    /// [`Graph::clear_adjacency`] in between.
    pub fn build_adjacency(&mut self) -> Result<()> {
        if self.adjacency_built {
            return Err(Error::AdjacencyAlreadyBuilt);
        }

        let mut by_pair: HashMap<(NodeId, NodeId), SemanticEdgeId> = HashMap::default();
        let mut bundled = 0usize;

        for ix in 0..self.real_count {
            let v = NodeId(ix);
            for i in 0..self.nodes[ix].raw_out.len() {
                let s = self.nodes[ix].raw_out[i];
                let w = self.semantic_edges[s.0].target;

                if let Some(&representative) = by_pair.get(&(v, w)) {
                    self.semantic_edges[s.0].bundled_with = Some(representative);
                    bundled += 1;
                    continue;
                }
                by_pair.insert((v, w), s);

                let e = EdgeId(self.edges.len());
                self.edges.push(LayoutEdge {
                    from: v,
                    to: w,
                    semantic: s,
                });
                self.semantic_edges[s.0].layout_edge = Some(e);

                let from = &mut self.nodes[v.0];
                from.successors.insert(w);
                from.out_edges.insert(e);
                let to = &mut self.nodes[w.0];
                to.predecessors.insert(v);
                to.in_edges.insert(e);
            }
        }

        self.adjacency_built = true;
        tracing::debug!(
            nodes = self.real_count,
            layout_edges = self.edges.len(),
            bundled,
            "built adjacency"
        );
        Ok(())
    }

    /// Discards everything derived from adjacency: successor/predecessor sets, layout edges,
    /// dummy nodes and the dummy segments of semantic edge paths. Layers of real nodes are left
    /// alone; use [`Graph::reset_layout`] to drop them as well.
    pub fn clear_adjacency(&mut self) {
        self.nodes.truncate(self.real_count);
        for node in &mut self.nodes {
            node.clear_adjacency();
        }
        self.edges.clear();
        for s in &mut self.semantic_edges {
            s.reset();
        }
        self.adjacency_built = false;
    }

    /// Checks that node sets and layout edges agree with each other.
    ///
    /// Every out edge of `v` must start at `v` and its target must be in `v`'s successors (and
    /// symmetrically for in edges); the node sets must hold exactly the endpoints of the edges.
    pub fn check_adjacency(&self) -> Result<()> {
        if !self.adjacency_built {
            return Err(Error::AdjacencyNotBuilt);
        }

        for (ix, node) in self.nodes.iter().enumerate() {
            let v = NodeId(ix);
            let inconsistent = |message: String| Error::InconsistentAdjacency { node: v, message };

            for e in node.out_edges() {
                let edge = self.try_edge(e)?;
                if edge.from != v {
                    return Err(Error::ForeignEdge { edge: e, node: v });
                }
                if !node.successors.contains(&edge.to) {
                    return Err(inconsistent(format!(
                        "out edge {e} targets {} which is not a successor",
                        edge.to
                    )));
                }
            }
            if node.successors.len() != node.out_edges.len() {
                return Err(inconsistent(format!(
                    "{} successors but {} out edges",
                    node.successors.len(),
                    node.out_edges.len()
                )));
            }

            for e in node.in_edges() {
                let edge = self.try_edge(e)?;
                if edge.to != v {
                    return Err(inconsistent(format!("in edge {e} does not end here")));
                }
                if !node.predecessors.contains(&edge.from) {
                    return Err(inconsistent(format!(
                        "in edge {e} starts at {} which is not a predecessor",
                        edge.from
                    )));
                }
            }
            if node.predecessors.len() != node.in_edges.len() {
                return Err(inconsistent(format!(
                    "{} predecessors but {} in edges",
                    node.predecessors.len(),
                    node.in_edges.len()
                )));
            }
        }
        Ok(())
    }
}
