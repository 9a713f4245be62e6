use crate::{EdgeId, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown node id: {node}")]
    UnknownNode { node: NodeId },

    #[error("unknown layout edge id: {edge}")]
    UnknownEdge { edge: EdgeId },

    #[error("self loop on node {node} cannot be layered")]
    SelfLoop { node: NodeId },

    #[error("adjacency is already built; clear it before building again")]
    AdjacencyAlreadyBuilt,

    #[error("adjacency has not been built")]
    AdjacencyNotBuilt,

    #[error("layout edge {edge} does not leave node {node}")]
    ForeignEdge { edge: EdgeId, node: NodeId },

    #[error("inconsistent adjacency at node {node}: {message}")]
    InconsistentAdjacency { node: NodeId, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
