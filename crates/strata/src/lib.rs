#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) layout for workflow-chain DAGs.
//!
//! The pipeline computes an abstract row/column placement, not pixel coordinates:
//!
//! 1. [`Graph::build_adjacency`](strata_graph::Graph::build_adjacency) collapses the domain
//!    connections into layout edges.
//! 2. [`assign::assign_layers`] places every node one layer above its highest successor;
//!    sinks land on layer 0.
//! 3. [`balance::balance_layers`] splits layers that are too wide.
//! 4. [`proper::make_proper`] inserts dummy nodes so every edge spans one layer.
//! 5. [`order::reduce_crossings`] reorders nodes inside layers with barycenter sweeps.
//!
//! The input graph must be acyclic.

pub use strata_graph as graph;
pub use strata_graph::{
    EdgeId, Graph, LayoutEdge, Node, NodeId, NodeKind, Placement, SemanticEdge, SemanticEdgeId,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assign;
pub mod balance;
pub mod error;
pub mod layering;
pub mod options;
pub mod order;
pub mod proper;
pub mod verify;

pub use error::{Error, Result};
pub use layering::Layering;
pub use options::{BalanceOptions, LayoutOptions};
pub use order::CrossingReport;
pub use verify::{verify, verify_path};

/// Counters collected while running [`layout_with_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStats {
    /// Layers after longest-path assignment, before balancing.
    pub assigned_layers: usize,
    pub split_layers: usize,
    pub dummies: usize,
    pub crossing: CrossingReport,
}

/// Lays out `g` and returns the layering.
///
/// Any layout state left from a previous run is discarded first, so the graph can be laid out
/// again after it was edited. On return every node (dummies included) has a layer and a
/// position, and every semantic edge path runs through one node per layer.
pub fn layout<N, E>(g: &mut Graph<N, E>, opts: &LayoutOptions) -> Result<Layering> {
    layout_with_stats(g, opts).map(|(layering, _)| layering)
}

pub fn layout_with_stats<N, E>(
    g: &mut Graph<N, E>,
    opts: &LayoutOptions,
) -> Result<(Layering, LayoutStats)> {
    opts.validate()?;
    g.reset_layout();

    g.build_adjacency()?;
    let assigned_layers = assign::assign_layers(g)?;
    let mut layering = Layering::from_graph(g)?;
    let split_layers = balance::balance_layers(g, &mut layering, &opts.balance)?;
    let dummies = proper::make_proper(g, &mut layering)?;
    let crossing = order::reduce_crossings(g, &mut layering, opts.max_iterations)?;

    let stats = LayoutStats {
        assigned_layers,
        split_layers,
        dummies,
        crossing,
    };
    tracing::debug!(
        nodes = g.real_node_count(),
        layers = layering.layer_count(),
        ?stats,
        "layout finished"
    );
    Ok((layering, stats))
}
