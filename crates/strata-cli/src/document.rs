//! JSON chain documents and their conversion to a layout graph.

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};
use strata::{Graph, Layering, NodeId};

#[derive(Debug, Clone, Deserialize)]
pub struct ChainDocument {
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
    #[serde(default)]
    pub edges: Vec<EdgeDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeDoc {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDoc {
    #[serde(default)]
    pub id: Option<String>,
    pub from: String,
    pub to: String,
}

#[derive(Debug)]
pub enum DocumentError {
    DuplicateNode(String),
    UnknownEndpoint { edge: usize, node: String },
    Graph(strata::graph::Error),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::DuplicateNode(id) => write!(f, "duplicate node id: {id}"),
            DocumentError::UnknownEndpoint { edge, node } => {
                write!(f, "edge #{edge} references unknown node: {node}")
            }
            DocumentError::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Graph(err) => Some(err),
            _ => None,
        }
    }
}

/// Node payloads are the document ids; edge payloads are the index into `edges`.
pub type ChainGraph = Graph<String, usize>;

impl ChainDocument {
    pub fn to_graph(&self) -> Result<ChainGraph, DocumentError> {
        let mut g = Graph::with_capacity(self.nodes.len(), self.edges.len());
        let mut by_id: HashMap<&str, NodeId> = HashMap::default();
        for node in &self.nodes {
            if by_id.contains_key(node.id.as_str()) {
                return Err(DocumentError::DuplicateNode(node.id.clone()));
            }
            by_id.insert(node.id.as_str(), g.add_node(node.id.clone()));
        }

        for (ix, edge) in self.edges.iter().enumerate() {
            let lookup = |id: &str| {
                by_id
                    .get(id)
                    .copied()
                    .ok_or_else(|| DocumentError::UnknownEndpoint {
                        edge: ix,
                        node: id.to_string(),
                    })
            };
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            g.add_semantic_edge(from, to, ix)
                .map_err(DocumentError::Graph)?;
        }
        Ok(g)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOut<'a> {
    pub layer_count: usize,
    pub dummies: usize,
    pub split_layers: usize,
    pub iterations: usize,
    pub converged: bool,
    pub layers: Vec<Vec<PlacedNodeOut<'a>>>,
    pub edges: Vec<EdgeOut<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedNodeOut<'a> {
    /// `None` for dummy nodes.
    pub id: Option<&'a str>,
    pub dummy: bool,
    pub layer: usize,
    pub position: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOut<'a> {
    pub id: Option<&'a str>,
    pub from: &'a str,
    pub to: &'a str,
    /// Index (in the input `edges` array) of the edge this one was bundled with.
    pub bundled_with: Option<usize>,
    pub path: Vec<PlacedNodeOut<'a>>,
}

fn placed<'a>(g: &'a ChainGraph, v: NodeId) -> Option<PlacedNodeOut<'a>> {
    let node = g.node(v)?;
    let placement = node.placement()?;
    Some(PlacedNodeOut {
        id: node.payload().map(String::as_str),
        dummy: node.is_dummy(),
        layer: placement.layer,
        position: placement.position,
    })
}

impl<'a> LayoutOut<'a> {
    pub fn new(
        doc: &'a ChainDocument,
        g: &'a ChainGraph,
        layering: &Layering,
        stats: &strata::LayoutStats,
    ) -> Self {
        let layers = layering
            .layers()
            .map(|layer| layer.iter().filter_map(|&v| placed(g, v)).collect())
            .collect();

        let edges = g
            .semantic_edges()
            .map(|(_, s)| {
                let input = &doc.edges[*s.payload()];
                EdgeOut {
                    id: input.id.as_deref(),
                    from: input.from.as_str(),
                    to: input.to.as_str(),
                    bundled_with: s
                        .bundled_with()
                        .and_then(|rep| g.semantic_edge(rep))
                        .map(|rep| *rep.payload()),
                    path: s.path().iter().filter_map(|&v| placed(g, v)).collect(),
                }
            })
            .collect();

        Self {
            layer_count: layering.layer_count(),
            dummies: stats.dummies,
            split_layers: stats.split_layers,
            iterations: stats.crossing.iterations,
            converged: stats.crossing.converged,
            layers,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> ChainDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn document_errors_expose_the_graph_error_as_source() {
        let err = doc(r#"{"nodes": [{"id": "a"}], "edges": [{"from": "a", "to": "a"}]}"#)
            .to_graph()
            .unwrap_err();
        let err: &dyn std::error::Error = &err;
        assert_eq!(err.to_string(), "self loop on node n0 cannot be layered");
        assert!(err.source().is_some());
    }

    #[test]
    fn document_errors_name_the_offending_id() {
        let err = doc(r#"{"nodes": [{"id": "a"}, {"id": "a"}]}"#)
            .to_graph()
            .unwrap_err();
        let err: &dyn std::error::Error = &err;
        assert_eq!(err.to_string(), "duplicate node id: a");
        assert!(err.source().is_none());
    }
}
