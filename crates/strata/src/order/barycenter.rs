//! Barycenter heuristic.

use strata_graph::{Graph, NodeId};

use crate::error::Result;
use crate::layering::Layering;

/// Which neighbouring layer a sweep aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Layer `i - 1`: the node's successors. Used by the forward sweep.
    Below,
    /// Layer `i + 1`: the node's predecessors. Used by the backward sweep.
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossingReport {
    /// Forward+backward passes that ran.
    pub iterations: usize,
    /// True when the last pass reordered nothing.
    pub converged: bool,
}

/// Mean position of the neighbours of `v` on `side`; `0.0` without neighbours.
pub fn barycenter<N, E>(g: &Graph<N, E>, v: NodeId, side: Side) -> Result<f64> {
    let node = g.try_node(v)?;
    let mut sum: f64 = 0.0;
    let mut count: usize = 0;
    let mut add = |u: NodeId| -> Result<()> {
        sum += g.try_node(u)?.position();
        count += 1;
        Ok(())
    };
    match side {
        Side::Below => node.successors().try_for_each(&mut add)?,
        Side::Above => node.predecessors().try_for_each(&mut add)?,
    }
    if count == 0 {
        return Ok(0.0);
    }
    Ok(sum / count as f64)
}

/// Reorders the nodes of `layering`, aligning each layer to its neighbours.
///
/// Every layer first gets sequential positions in its current order; layer 0 keeps that
/// order as the baseline. Each iteration sweeps forward over layers `1..last` (aligning to
/// the layer below) and backward over `last-1..0` (aligning to the layer above). Iteration
/// stops after `max_iterations` or after a pass that moved nothing.
pub fn reduce_crossings<N, E>(
    g: &mut Graph<N, E>,
    layering: &mut Layering,
    max_iterations: usize,
) -> Result<CrossingReport> {
    for i in 0..layering.layer_count() {
        assign_positions(g, layering.layer(i).unwrap_or_default())?;
    }

    let count = layering.layer_count();
    let mut report = CrossingReport::default();
    if count < 2 {
        report.converged = true;
        return Ok(report);
    }

    while report.iterations < max_iterations {
        let mut changed = false;
        for i in 1..count {
            changed |= sweep_layer(g, layering, i, Side::Below)?;
        }
        for i in (0..count - 1).rev() {
            changed |= sweep_layer(g, layering, i, Side::Above)?;
        }
        report.iterations += 1;
        if !changed {
            report.converged = true;
            break;
        }
    }

    tracing::debug!(
        iterations = report.iterations,
        converged = report.converged,
        "reduced crossings"
    );
    Ok(report)
}

/// Stable-sorts layer `i` by barycenter and renumbers its positions. Returns whether the order
/// changed.
pub fn sweep_layer<N, E>(
    g: &mut Graph<N, E>,
    layering: &mut Layering,
    i: usize,
    side: Side,
) -> Result<bool> {
    let Some(layer) = layering.layer_mut(i) else {
        return Ok(false);
    };
    let mut keyed: Vec<(f64, NodeId)> = Vec::with_capacity(layer.len());
    for &v in layer.iter() {
        keyed.push((barycenter(g, v, side)?, v));
    }
    // `sort_by` is stable: equal barycenters keep their previous relative order.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let changed = keyed.iter().map(|&(_, v)| v).ne(layer.iter().copied());
    if changed {
        layer.clear();
        layer.extend(keyed.into_iter().map(|(_, v)| v));
    }
    assign_positions(g, layer)?;
    Ok(changed)
}

fn assign_positions<N, E>(g: &mut Graph<N, E>, layer: &[NodeId]) -> Result<()> {
    for (j, &v) in layer.iter().enumerate() {
        g.try_node_mut(v)?.set_position(j as f64);
    }
    Ok(())
}
