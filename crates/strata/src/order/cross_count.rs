use strata_graph::{Graph, NodeId};

use crate::error::Result;
use crate::layering::Layering;

/// Counts edge crossings between every pair of adjacent layers, using the layer order in
/// `layering`. Only proper edges (one layer apart) are counted.
pub fn count_crossings<N, E>(g: &Graph<N, E>, layering: &Layering) -> Result<usize> {
    let mut cc: usize = 0;
    for i in 1..layering.layer_count() {
        let (Some(north), Some(south)) = (layering.layer(i), layering.layer(i - 1)) else {
            continue;
        };
        cc += two_layer_cross_count(g, north, south)?;
    }
    Ok(cc)
}

fn two_layer_cross_count<N, E>(
    g: &Graph<N, E>,
    north: &[NodeId],
    south: &[NodeId],
) -> Result<usize> {
    if south.is_empty() {
        return Ok(0);
    }

    let mut south_pos: rustc_hash::FxHashMap<NodeId, usize> = Default::default();
    for (i, &v) in south.iter().enumerate() {
        south_pos.insert(v, i);
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = Vec::new();
        for w in g.try_node(v)?.successors() {
            if let Some(&pos) = south_pos.get(&w) {
                entries.push(pos);
            }
        }
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    // Accumulator tree over south positions; each insert counts the already-inserted entries
    // to its right.
    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    Ok(cc)
}
