//! The layout result: nodes grouped by layer, each layer in display order.

use strata_graph::{Graph, NodeId};

use crate::error::{Error, Result};

/// Ordered layers of ordered nodes. Layer 0 holds the sinks.
///
/// After [`crate::layout`] every node of the graph (dummies included) appears in exactly one
/// layer, the one its `layer` field names, and its `position` equals its index in that layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layering {
    layers: Vec<Vec<NodeId>>,
}

impl Layering {
    /// Groups the nodes of `g` by their `layer` field, in node id order.
    pub fn from_graph<N, E>(g: &Graph<N, E>) -> Result<Self> {
        let mut layers: Vec<Vec<NodeId>> = Vec::new();
        for (v, node) in g.nodes() {
            let layer = node.layer().ok_or(Error::Unlayered { node: v })?;
            if layers.len() <= layer {
                layers.resize_with(layer + 1, Vec::new);
            }
            layers[layer].push(v);
        }
        Ok(Self { layers })
    }

    pub fn from_layers(layers: Vec<Vec<NodeId>>) -> Self {
        Self { layers }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, i: usize) -> Option<&[NodeId]> {
        self.layers.get(i).map(Vec::as_slice)
    }

    pub fn layers(&self) -> impl ExactSizeIterator<Item = &[NodeId]> + '_ {
        self.layers.iter().map(Vec::as_slice)
    }

    /// Total number of nodes over all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Layer index and in-layer index of `v`.
    pub fn find(&self, v: NodeId) -> Option<(usize, usize)> {
        self.layers
            .iter()
            .enumerate()
            .find_map(|(i, layer)| layer.iter().position(|&n| n == v).map(|j| (i, j)))
    }

    pub fn into_layers(self) -> Vec<Vec<NodeId>> {
        self.layers
    }

    pub(crate) fn layer_mut(&mut self, i: usize) -> Option<&mut Vec<NodeId>> {
        self.layers.get_mut(i)
    }

    pub(crate) fn push(&mut self, i: usize, v: NodeId) {
        if self.layers.len() <= i {
            self.layers.resize_with(i + 1, Vec::new);
        }
        self.layers[i].push(v);
    }

    pub(crate) fn replace_layers(&mut self, layers: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
        std::mem::replace(&mut self.layers, layers)
    }
}

impl<'a> IntoIterator for &'a Layering {
    type Item = &'a Vec<NodeId>;
    type IntoIter = std::slice::Iter<'a, Vec<NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
