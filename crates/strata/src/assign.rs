//! Longest-path layer assignment, measured from the sinks.
//!
//! `layer(v) = 0` for a node without successors, otherwise `1 + max(layer(s))` over its
//! successors. The graph must be acyclic.

use strata_graph::{Graph, NodeId};

use crate::error::{Error, Result};

/// Assigns a layer to every node and returns the number of layers.
///
/// Works in passes: pass `k` gives layer `k` to each unassigned node whose successors all carry
/// a layer other than `k`. Skipping successors that received `k` in the same pass makes the
/// result independent of node order, so every node lands exactly one above its highest
/// successor.
///
/// Requires built adjacency. A pass that assigns nothing means the remaining nodes sit on a
/// cycle; that is reported as [`Error::AssignmentStalled`].
pub fn assign_layers<N, E>(g: &mut Graph<N, E>) -> Result<usize> {
    if !g.is_adjacency_built() {
        return Err(strata_graph::Error::AdjacencyNotBuilt.into());
    }

    let mut pending: Vec<NodeId> = g.node_ids().collect();
    for &v in &pending {
        g.try_node_mut(v)?.set_layer(None);
    }

    let mut pass: usize = 0;
    while !pending.is_empty() {
        let before = pending.len();
        let mut next: Vec<NodeId> = Vec::with_capacity(before);

        for v in pending {
            if is_ready(g, v, pass)? {
                g.try_node_mut(v)?.set_layer(Some(pass));
            } else {
                next.push(v);
            }
        }

        tracing::trace!(pass, assigned = before - next.len(), "layer pass");
        if next.len() == before {
            return Err(Error::AssignmentStalled {
                pass,
                remaining: before,
            });
        }
        pending = next;
        pass += 1;
    }

    tracing::debug!(nodes = g.node_count(), layers = pass, "assigned layers");
    Ok(pass)
}

fn is_ready<N, E>(g: &Graph<N, E>, v: NodeId, pass: usize) -> Result<bool> {
    for s in g.try_node(v)?.successors() {
        match g.try_node(s)?.layer() {
            Some(layer) if layer != pass => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}
