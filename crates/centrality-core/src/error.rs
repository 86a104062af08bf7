use thiserror::Error;

/// Errors raised while constructing or configuring graphs.
///
/// The centrality algorithms themselves never fail: they operate on graphs
/// that already satisfy every structural invariant. These variants only
/// surface at the edges, when a caller hands in explicit edges, a metric
/// name, or a generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {id} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { id: usize, node_count: usize },

    #[error("self-loop on node {id} is not allowed")]
    SelfLoop { id: usize },

    #[error("adjacency lists disagree with the edge list at node {id}")]
    AdjacencyMismatch { id: usize },

    #[error("unknown metric '{0}' (expected degree, closeness or betweenness)")]
    UnknownMetric(String),

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
