//! Properness pass: makes every layout edge span exactly one layer.
//!
//! Long edges are cut one layer at a time from the top. Cutting an edge out of layer `i`
//! leaves a dummy on layer `i - 1` whose own edge is cut again when that layer is processed,
//! so an edge spanning `k` layers ends up with `k - 1` dummies.

use strata_graph::{EdgeId, Graph, NodeId};

use crate::error::{Error, Result};
use crate::layering::Layering;

/// Inserts dummy nodes until every layout edge goes from layer `i` to layer `i - 1`.
///
/// New dummies are appended to their layer in `layering`. Bundled semantic edges get a copy of
/// their representative's final path. Returns the number of dummies inserted.
pub fn make_proper<N, E>(g: &mut Graph<N, E>, layering: &mut Layering) -> Result<usize> {
    let mut inserted = 0usize;

    // Edges leaving layer 1 can only reach layer 0.
    for i in (2..layering.layer_count()).rev() {
        let members: Vec<NodeId> = layering.layer(i).unwrap_or_default().to_vec();
        for v in members {
            let long = long_out_edges(g, v, i)?;
            if long.is_empty() {
                continue;
            }
            let dummies = g.subdivide_out_edges(v, &long, i - 1)?;
            inserted += dummies.len();
            for d in dummies {
                layering.push(i - 1, d);
            }
        }
        tracing::trace!(layer = i, inserted, "made layer proper");
    }

    g.sync_bundled_paths();
    tracing::debug!(dummies = inserted, "inserted dummy nodes");
    Ok(inserted)
}

fn long_out_edges<N, E>(g: &Graph<N, E>, v: NodeId, layer: usize) -> Result<Vec<EdgeId>> {
    let node = g.try_node(v)?;
    let mut long = Vec::new();
    for e in node.out_edges() {
        let to = g.try_edge(e)?.to();
        let to_layer = g.try_node(to)?.layer().ok_or(Error::Unlayered { node: to })?;
        if to_layer + 1 == layer {
            continue;
        }
        if to_layer >= layer {
            return Err(Error::NonDescendingEdge {
                edge: e,
                from_layer: layer,
                to_layer,
            });
        }
        long.push(e);
    }
    Ok(long)
}
