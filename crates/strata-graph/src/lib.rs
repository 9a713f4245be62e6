#![forbid(unsafe_code)]

//! Arena graph model used by `strata`.
//!
//! A [`Graph`] owns three stores: nodes (real nodes carrying a caller payload, plus the dummy
//! nodes the layering inserts), semantic edges (one per domain connection) and layout edges
//! (one per distinct adjacent node pair, built by [`Graph::build_adjacency`]).
//!
//! Everything is addressed by index ([`NodeId`], [`EdgeId`], [`SemanticEdgeId`]); adjacency is
//! stored as insertion-ordered index sets so iteration order is deterministic.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    EdgeId, Graph, LayoutEdge, Node, NodeId, NodeKind, Placement, SemanticEdge, SemanticEdgeId,
};
