//! Dummy-node insertion.

use super::{EdgeId, Graph, IndexSet, LayoutEdge, Node, NodeId, NodeKind};
use crate::error::{Error, Result};

impl<N, E> Graph<N, E> {
    /// Routes each listed out edge of `v` through a fresh dummy node placed on `dummy_layer`.
    ///
    /// For an edge `v -> w` the edge is retargeted to `v -> d` and a new edge `d -> w` is
    /// created for the same semantic edge; `d` is inserted into that semantic edge's path right
    /// after `v`. The successor set of `v` is rebuilt once for the whole batch.
    ///
    /// Returns the new dummies in the order of `edges`.
    pub fn subdivide_out_edges(
        &mut self,
        v: NodeId,
        edges: &[EdgeId],
        dummy_layer: usize,
    ) -> Result<Vec<NodeId>> {
        if !self.adjacency_built {
            return Err(Error::AdjacencyNotBuilt);
        }
        let node = self.try_node(v)?;
        for &e in edges {
            if !node.out_edges.contains(&e) {
                return Err(Error::ForeignEdge { edge: e, node: v });
            }
        }
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let out_edges: Vec<EdgeId> = node.out_edges().collect();

        // Locate `v` on every affected path before touching the graph.
        let mut cuts: Vec<(EdgeId, usize)> = Vec::with_capacity(edges.len());
        for &e in &out_edges {
            if !edges.contains(&e) {
                continue;
            }
            let semantic = self.edges[e.0].semantic;
            let at = self.semantic_edges[semantic.0]
                .path
                .iter()
                .position(|&p| p == v)
                .ok_or_else(|| Error::InconsistentAdjacency {
                    node: v,
                    message: format!("semantic edge {semantic} does not pass through this node"),
                })?;
            cuts.push((e, at));
        }

        let mut successors: IndexSet<NodeId> = IndexSet::default();
        let mut dummies: Vec<(EdgeId, NodeId)> = Vec::with_capacity(edges.len());

        for e in out_edges {
            let LayoutEdge { to: w, semantic, .. } = self.edges[e.0];
            let Some(&(_, at)) = cuts.iter().find(|(ce, _)| *ce == e) else {
                successors.insert(w);
                continue;
            };

            let d = NodeId(self.nodes.len());
            let tail = EdgeId(self.edges.len());
            self.edges[e.0].to = d;
            self.edges.push(LayoutEdge {
                from: d,
                to: w,
                semantic,
            });

            let mut dummy = Node::new(NodeKind::Dummy, Some(dummy_layer));
            dummy.predecessors.insert(v);
            dummy.in_edges.insert(e);
            dummy.successors.insert(w);
            dummy.out_edges.insert(tail);
            self.nodes.push(dummy);

            let target = &mut self.nodes[w.0];
            target.predecessors.shift_remove(&v);
            target.predecessors.insert(d);
            target.in_edges.shift_remove(&e);
            target.in_edges.insert(tail);

            self.semantic_edges[semantic.0].path.insert(at + 1, d);

            successors.insert(d);
            dummies.push((e, d));
        }

        self.nodes[v.0].successors = successors;

        // Keep the result in the caller's order.
        Ok(edges
            .iter()
            .filter_map(|e| dummies.iter().find(|(de, _)| de == e).map(|&(_, d)| d))
            .collect())
    }

    /// Copies the path of every bundled semantic edge from the edge it was bundled with.
    pub fn sync_bundled_paths(&mut self) {
        for ix in 0..self.semantic_edges.len() {
            let Some(rep) = self.semantic_edges[ix].bundled_with else {
                continue;
            };
            let path = self.semantic_edges[rep.0].path.clone();
            self.semantic_edges[ix].path = path;
        }
    }
}
