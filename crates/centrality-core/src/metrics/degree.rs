//! Degree centrality: in-degree plus out-degree, no traversal needed.

use crate::graph::Graph;

/// Total degree of every node, as `f64` so it shares [`super::Scores`]
/// with the traversal-based metrics.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &Graph) -> Vec<f64> {
    graph.nodes().iter().map(|n| n.degree() as f64).collect()
}
