//! Width control: splits layers that are much wider than the layering is tall.

use strata_graph::{Graph, NodeId};

use crate::error::Result;
use crate::layering::Layering;
use crate::options::BalanceOptions;

/// Splits every layer whose node count exceeds `threshold * layer_count` into two adjacent
/// layers and renumbers the layering so it stays contiguous from 0.
///
/// The layer count used for the threshold is the one before any split, and each layer is
/// split at most once. Even-indexed members keep their layer; odd-indexed members move to a
/// new layer directly above it. Layer 0 is never split (sinks stay on layer 0), nor is any
/// layer narrower than `opts.min_width`.
///
/// Returns the number of layers that were split.
pub fn balance_layers<N, E>(
    g: &mut Graph<N, E>,
    layering: &mut Layering,
    opts: &BalanceOptions,
) -> Result<usize> {
    if !opts.enabled || layering.layer_count() < 2 {
        return Ok(0);
    }

    let limit = opts.threshold * layering.layer_count() as f64;
    let original = layering.replace_layers(Vec::new());
    let mut balanced: Vec<Vec<NodeId>> = Vec::with_capacity(original.len() * 2);
    let mut splits = 0usize;

    let min_width = opts.min_width.max(2);
    for (i, layer) in original.into_iter().enumerate() {
        if i == 0 || layer.len() < min_width || (layer.len() as f64) <= limit {
            balanced.push(layer);
            continue;
        }

        let width = layer.len();
        let (stay, lift): (Vec<_>, Vec<_>) = layer
            .into_iter()
            .enumerate()
            .partition(|(j, _)| j % 2 == 0);
        tracing::trace!(
            layer = i,
            width,
            kept = stay.len(),
            lifted = lift.len(),
            "splitting wide layer"
        );
        balanced.push(stay.into_iter().map(|(_, v)| v).collect());
        balanced.push(lift.into_iter().map(|(_, v)| v).collect());
        splits += 1;
    }

    layering.replace_layers(balanced);
    for (i, layer) in layering.layers().enumerate() {
        for &v in layer {
            g.try_node_mut(v)?.set_layer(Some(i));
        }
    }

    tracing::debug!(
        splits,
        layers = layering.layer_count(),
        "balanced layer widths"
    );
    Ok(splits)
}
