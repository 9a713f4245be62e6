//! Post-layout invariant checks.

use rustc_hash::FxHashSet as HashSet;
use strata_graph::{Graph, NodeId, SemanticEdgeId};

use crate::error::{Error, Result};
use crate::layering::Layering;

fn violated(message: String) -> Error {
    Error::InvariantViolated { message }
}

/// Checks a finished layout:
/// - every node of `g` appears exactly once in `layering`, on the layer its `layer` field names,
///   with `position` equal to its index;
/// - every layout edge goes from layer `i` to layer `i - 1`;
/// - every semantic edge path passes [`verify_path`], and a bundled edge carries the same path
///   as the edge it was bundled with;
/// - successor/predecessor sets agree with the layout edges.
pub fn verify<N, E>(g: &Graph<N, E>, layering: &Layering) -> Result<()> {
    g.check_adjacency()?;

    let mut seen: HashSet<NodeId> = HashSet::default();
    for (i, layer) in layering.layers().enumerate() {
        for (j, &v) in layer.iter().enumerate() {
            if !seen.insert(v) {
                return Err(violated(format!("node {v} appears more than once")));
            }
            let node = g.try_node(v)?;
            if node.layer() != Some(i) {
                return Err(violated(format!(
                    "node {v} is listed on layer {i} but its layer is {:?}",
                    node.layer()
                )));
            }
            if node.position() != j as f64 {
                return Err(violated(format!(
                    "node {v} is at index {j} of layer {i} but its position is {}",
                    node.position()
                )));
            }
        }
    }
    if seen.len() != g.node_count() {
        return Err(violated(format!(
            "layering holds {} of {} nodes",
            seen.len(),
            g.node_count()
        )));
    }

    for (e, edge) in g.edges() {
        let from = g.try_node(edge.from())?.layer();
        let to = g.try_node(edge.to())?.layer();
        match (from, to) {
            (Some(from), Some(to)) if from == to + 1 => {}
            _ => {
                return Err(violated(format!(
                    "layout edge {e} runs from layer {from:?} to layer {to:?}"
                )));
            }
        }
    }

    for (s, edge) in g.semantic_edges() {
        if let Some(rep) = edge.bundled_with() {
            let rep_path = g.semantic_edge(rep).map(|r| r.path());
            if rep_path != Some(edge.path()) {
                return Err(violated(format!(
                    "semantic edge {s} is bundled with {rep} but does not share its path"
                )));
            }
        }
        verify_path(g, s, edge.path())?;
    }

    Ok(())
}

/// Checks `path` as the route of semantic edge `s`: it starts at the source, ends at the
/// target, runs through dummies only in between, and descends one layer per step. Self loops
/// are rejected when edges are added, so a path that passes the endpoint test has two nodes.
pub fn verify_path<N, E>(g: &Graph<N, E>, s: SemanticEdgeId, path: &[NodeId]) -> Result<()> {
    let edge = g
        .semantic_edge(s)
        .ok_or_else(|| violated(format!("unknown semantic edge {s}")))?;
    if path.first() != Some(&edge.source()) || path.last() != Some(&edge.target()) {
        return Err(violated(format!(
            "path of semantic edge {s} does not run from {} to {}",
            edge.source(),
            edge.target()
        )));
    }
    for &v in &path[1..path.len() - 1] {
        if !g.try_node(v)?.is_dummy() {
            return Err(violated(format!(
                "path of semantic edge {s} passes through real node {v}"
            )));
        }
    }

    for pair in path.windows(2) {
        let upper = g.try_node(pair[0])?.layer();
        let lower = g.try_node(pair[1])?.layer();
        match (upper, lower) {
            (Some(upper), Some(lower)) if upper == lower + 1 => {}
            _ => {
                return Err(violated(format!(
                    "path of semantic edge {s} steps from layer {upper:?} to layer {lower:?}"
                )));
            }
        }
    }
    Ok(())
}
