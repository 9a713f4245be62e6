//! Node and edge records stored by [`Graph`](super::Graph).

use super::IndexSet;
use super::ids::{EdgeId, NodeId, SemanticEdgeId};

/// What a node stands for: a caller node with its payload, or a dummy inserted so that a long
/// edge spans one layer per segment.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<N> {
    Real(N),
    Dummy,
}

/// Layer and in-layer position handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub layer: usize,
    pub position: f64,
}

#[derive(Debug, Clone)]
pub struct Node<N> {
    pub(in crate::graph) kind: NodeKind<N>,
    pub(in crate::graph) layer: Option<usize>,
    pub(in crate::graph) position: f64,

    // Built by the adjacency builder; dummies get theirs when they are created.
    pub(in crate::graph) successors: IndexSet<NodeId>,
    pub(in crate::graph) predecessors: IndexSet<NodeId>,
    pub(in crate::graph) out_edges: IndexSet<EdgeId>,
    pub(in crate::graph) in_edges: IndexSet<EdgeId>,

    // Raw domain connections in insertion order. Always empty for dummies.
    pub(in crate::graph) raw_out: Vec<SemanticEdgeId>,
    pub(in crate::graph) raw_in: Vec<SemanticEdgeId>,
}

impl<N> Node<N> {
    pub(in crate::graph) fn new(kind: NodeKind<N>, layer: Option<usize>) -> Self {
        Self {
            kind,
            layer,
            position: 0.0,
            successors: IndexSet::default(),
            predecessors: IndexSet::default(),
            out_edges: IndexSet::default(),
            in_edges: IndexSet::default(),
            raw_out: Vec::new(),
            raw_in: Vec::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind<N> {
        &self.kind
    }

    /// The caller payload, `None` for dummy nodes.
    pub fn payload(&self) -> Option<&N> {
        match &self.kind {
            NodeKind::Real(payload) => Some(payload),
            NodeKind::Dummy => None,
        }
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self.kind, NodeKind::Dummy)
    }

    pub fn layer(&self) -> Option<usize> {
        self.layer
    }

    pub fn set_layer(&mut self, layer: Option<usize>) {
        self.layer = layer;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub fn placement(&self) -> Option<Placement> {
        self.layer.map(|layer| Placement {
            layer,
            position: self.position,
        })
    }

    pub fn successors(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.successors.iter().copied()
    }

    pub fn predecessors(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.predecessors.iter().copied()
    }

    pub fn has_successor(&self, v: NodeId) -> bool {
        self.successors.contains(&v)
    }

    pub fn has_predecessor(&self, v: NodeId) -> bool {
        self.predecessors.contains(&v)
    }

    pub fn out_edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        self.out_edges.iter().copied()
    }

    pub fn in_edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        self.in_edges.iter().copied()
    }

    /// Outgoing domain connections, in the order they were added.
    pub fn raw_out(&self) -> &[SemanticEdgeId] {
        &self.raw_out
    }

    /// Incoming domain connections, in the order they were added.
    pub fn raw_in(&self) -> &[SemanticEdgeId] {
        &self.raw_in
    }

    pub(in crate::graph) fn clear_adjacency(&mut self) {
        self.successors.clear();
        self.predecessors.clear();
        self.out_edges.clear();
        self.in_edges.clear();
    }
}

/// A rank-adjacent (after the properness pass) edge of the layered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge {
    pub(in crate::graph) from: NodeId,
    pub(in crate::graph) to: NodeId,
    pub(in crate::graph) semantic: SemanticEdgeId,
}

impl LayoutEdge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    /// The domain connection this segment belongs to.
    pub fn semantic(&self) -> SemanticEdgeId {
        self.semantic
    }
}

/// A domain connection and the visual path it takes through the layering.
#[derive(Debug, Clone)]
pub struct SemanticEdge<E> {
    pub(in crate::graph) source: NodeId,
    pub(in crate::graph) target: NodeId,
    pub(in crate::graph) payload: E,
    pub(in crate::graph) path: Vec<NodeId>,
    pub(in crate::graph) layout_edge: Option<EdgeId>,
    pub(in crate::graph) bundled_with: Option<SemanticEdgeId>,
}

impl<E> SemanticEdge<E> {
    pub(in crate::graph) fn new(source: NodeId, target: NodeId, payload: E) -> Self {
        Self {
            source,
            target,
            payload,
            path: vec![source, target],
            layout_edge: None,
            bundled_with: None,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// Source, the dummies in layer order, then target.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Number of dummy nodes on the path.
    pub fn dummy_count(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// The first layout edge created for this connection. `None` when the connection was
    /// bundled into another one between the same pair, or before adjacency is built.
    pub fn layout_edge(&self) -> Option<EdgeId> {
        self.layout_edge
    }

    /// The connection that represents this one in the layered graph, if it was bundled.
    pub fn bundled_with(&self) -> Option<SemanticEdgeId> {
        self.bundled_with
    }

    pub(in crate::graph) fn reset(&mut self) {
        self.path.clear();
        self.path.push(self.source);
        self.path.push(self.target);
        self.layout_edge = None;
        self.bundled_with = None;
    }
}
