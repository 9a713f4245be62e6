//! The arena [`Graph`] container.
//!
//! Nodes, layout edges and semantic edges live in three `Vec` stores and reference each other
//! by index. Dummy nodes are always stored after every real node; adding a real node or a
//! connection to a graph that carries layout state discards that state first (see
//! [`Graph::reset_layout`]).

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};

mod adjacency;
mod entries;
mod ids;
mod subdivide;

pub use entries::{LayoutEdge, Node, NodeKind, Placement, SemanticEdge};
pub use ids::{EdgeId, NodeId, SemanticEdgeId};

type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;
type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[derive(Debug, Clone)]
pub struct Graph<N, E = ()> {
    nodes: Vec<Node<N>>,
    // Number of real nodes; `nodes[real_count..]` are dummies.
    real_count: usize,
    edges: Vec<LayoutEdge>,
    semantic_edges: Vec<SemanticEdge<E>>,
    adjacency_built: bool,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            real_count: 0,
            edges: Vec::new(),
            semantic_edges: Vec::new(),
            adjacency_built: false,
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            real_count: 0,
            edges: Vec::with_capacity(edges),
            semantic_edges: Vec::with_capacity(edges),
            adjacency_built: false,
        }
    }

    /// Adds a real node carrying `payload`.
    pub fn add_node(&mut self, payload: N) -> NodeId {
        if self.has_layout_state() {
            self.reset_layout();
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(NodeKind::Real(payload), None));
        self.real_count += 1;
        id
    }

    /// Adds a domain connection from `source` to `target`.
    ///
    /// Several connections between the same pair are allowed; only the first one drives the
    /// layering (see [`Graph::build_adjacency`]).
    pub fn add_semantic_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        payload: E,
    ) -> Result<SemanticEdgeId> {
        self.real_node(source)?;
        self.real_node(target)?;
        if source == target {
            return Err(Error::SelfLoop { node: source });
        }
        if self.has_layout_state() {
            self.reset_layout();
        }

        let id = SemanticEdgeId(self.semantic_edges.len());
        self.semantic_edges
            .push(SemanticEdge::new(source, target, payload));
        self.nodes[source.0].raw_out.push(id);
        self.nodes[target.0].raw_in.push(id);
        Ok(id)
    }

    pub fn node(&self, v: NodeId) -> Option<&Node<N>> {
        self.nodes.get(v.0)
    }

    pub fn node_mut(&mut self, v: NodeId) -> Option<&mut Node<N>> {
        self.nodes.get_mut(v.0)
    }

    /// Like [`Graph::node`] but reports unknown ids as an error.
    pub fn try_node(&self, v: NodeId) -> Result<&Node<N>> {
        self.nodes.get(v.0).ok_or(Error::UnknownNode { node: v })
    }

    pub fn try_node_mut(&mut self, v: NodeId) -> Result<&mut Node<N>> {
        self.nodes.get_mut(v.0).ok_or(Error::UnknownNode { node: v })
    }

    fn real_node(&self, v: NodeId) -> Result<&Node<N>> {
        if v.0 >= self.real_count {
            return Err(Error::UnknownNode { node: v });
        }
        Ok(&self.nodes[v.0])
    }

    pub fn contains_node(&self, v: NodeId) -> bool {
        v.0 < self.nodes.len()
    }

    /// All node ids, real nodes first, dummies after.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node<N>)> + '_ {
        self.nodes.iter().enumerate().map(|(ix, n)| (NodeId(ix), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn real_node_count(&self) -> usize {
        self.real_count
    }

    pub fn dummy_count(&self) -> usize {
        self.nodes.len() - self.real_count
    }

    pub fn payload(&self, v: NodeId) -> Option<&N> {
        self.node(v).and_then(Node::payload)
    }

    pub fn placement(&self, v: NodeId) -> Option<Placement> {
        self.node(v).and_then(Node::placement)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&LayoutEdge> {
        self.edges.get(e.0)
    }

    pub fn try_edge(&self, e: EdgeId) -> Result<&LayoutEdge> {
        self.edges.get(e.0).ok_or(Error::UnknownEdge { edge: e })
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &LayoutEdge)> + '_ {
        self.edges.iter().enumerate().map(|(ix, e)| (EdgeId(ix), e))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn semantic_edge(&self, s: SemanticEdgeId) -> Option<&SemanticEdge<E>> {
        self.semantic_edges.get(s.0)
    }

    pub fn semantic_edges(
        &self,
    ) -> impl ExactSizeIterator<Item = (SemanticEdgeId, &SemanticEdge<E>)> + '_ {
        self.semantic_edges
            .iter()
            .enumerate()
            .map(|(ix, s)| (SemanticEdgeId(ix), s))
    }

    pub fn semantic_edge_count(&self) -> usize {
        self.semantic_edges.len()
    }

    pub fn is_adjacency_built(&self) -> bool {
        self.adjacency_built
    }

    /// True when adjacency or dummy nodes from a previous layout are present.
    pub fn has_layout_state(&self) -> bool {
        self.adjacency_built || self.dummy_count() > 0
    }

    /// Drops every trace of a previous layout: dummy nodes, layout edges, adjacency sets,
    /// layers, positions, and semantic edge paths. Real node ids stay valid.
    pub fn reset_layout(&mut self) {
        tracing::trace!(dummies = self.dummy_count(), "resetting layout state");
        self.clear_adjacency();
        for node in &mut self.nodes {
            node.layer = None;
            node.position = 0.0;
        }
    }
}
