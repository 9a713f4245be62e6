use strata_graph::{EdgeId, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] strata_graph::Error),

    #[error("invalid layout options: {message}")]
    InvalidOptions { message: String },

    #[error("layout options JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "layer assignment made no progress in pass {pass} with {remaining} node(s) left; the graph must be acyclic"
    )]
    AssignmentStalled { pass: usize, remaining: usize },

    #[error("node {node} has no layer")]
    Unlayered { node: NodeId },

    #[error(
        "layout edge {edge} runs from layer {from_layer} to layer {to_layer}; edges must point to a lower layer"
    )]
    NonDescendingEdge {
        edge: EdgeId,
        from_layer: usize,
        to_layer: usize,
    },

    #[error("layout invariant violated: {message}")]
    InvariantViolated { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
