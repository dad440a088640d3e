//! Error types shared by the graph model, the runners and the authoring helpers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("start node is not in the graph: {0}")]
    UnknownStartNode(String),

    #[error("self-loops are not allowed: {0}")]
    SelfLoop(String),

    #[error("edge weight is not comparable with itself: {0}")]
    IncomparableWeight(String),

    #[error("parallel edge between {0} and {1}")]
    ParallelEdge(String, String),

    #[error("invalid edge list: {0}")]
    Parse(String),

    #[error("node {node} is out of range for a graph of {order} nodes")]
    NodeOutOfRange { node: usize, order: usize },

    #[error("edge weight must be positive: {0}")]
    NonPositiveWeight(String),

    #[error("invalid random graph configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        Error::UnknownNode(format!("{node:?}"))
    }
}
