//! Closeness centrality over outgoing edges.
//!
//! # Algorithm
//!
//! For each node `s`, a breadth-first search along `edges_out` gives the
//! hop distance to every node `s` can reach. The score is
//!
//! ```text
//! closeness(s) = (N - 1) / Σ distance(s, t)   over reachable t
//! ```
//!
//! Unreachable nodes contribute nothing to the sum instead of making it
//! infinite, so a node that reaches few others scores *higher* than one
//! that reaches many distant nodes.
//!
//! # Degenerate cases
//!
//! - `N = 0`: empty result.
//! - `N = 1`: the single node scores `0.0`.
//! - `N >= 2` and nothing reachable from `s`: the sum is zero and the score
//!   is the unclamped division result, `f64::INFINITY`.
//!
//! Complexity: O(N * (N + E)), one BFS per node.

use std::collections::VecDeque;

use tracing::instrument;

use crate::graph::Graph;

/// Closeness score of every node, indexed by id.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }

    let numerator = (n - 1) as f64;
    (0..n)
        .map(|s| {
            let total: usize = bfs_distances(graph, s).into_iter().flatten().sum();
            numerator / total as f64
        })
        .collect()
}

/// Hop distance from `source` to every node; `None` when unreachable.
#[must_use]
pub fn bfs_distances(graph: &Graph, source: usize) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; graph.node_count()];
    dist[source] = Some(0);

    let mut queue = VecDeque::from([(source, 0usize)]);
    while let Some((v, dv)) = queue.pop_front() {
        for &w in graph.out_neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back((w, dv + 1));
            }
        }
    }

    dist
}
