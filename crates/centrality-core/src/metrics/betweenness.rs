//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are bridges: most
//! traffic between other nodes has to pass through them.
//!
//! # Algorithm
//!
//! We implement Brandes' algorithm (2001) for unweighted directed graphs:
//!
//! 1. For each source node `s`, run BFS along outgoing edges to compute
//!    distances, shortest-path counts (`sigma`) and predecessor lists.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(N * (N + E)).
//!
//! # Output
//!
//! Scores are **not** normalized. Callers wanting the usual directed
//! normalization divide by `(n-1)*(n-2)`.
//!
//! Parallel edges each count as a distinct shortest path: a doubled edge
//! contributes two predecessor entries and doubles `sigma` downstream.

use std::collections::VecDeque;

use tracing::instrument;

use crate::graph::Graph;

/// Compute betweenness centrality for all nodes in the graph.
///
/// Nodes that lie on no shortest path between two other nodes, including
/// every node of a disconnected or single-node graph, receive 0.0.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn betweenness_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    // Per-source buffers, reset at the top of each iteration.
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        predecessors.iter_mut().for_each(Vec::clear);
        sigma.fill(0.0);
        dist.fill(None);
        delta.fill(0.0);

        sigma[s] = 1.0;
        dist[s] = Some(0);
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let next = dist[v].map_or(0, |d| d + 1);

            for &w in graph.out_neighbors(v) {
                // First visit to w?
                if dist[w].is_none() {
                    dist[w] = Some(next);
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w] == Some(next) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order. Only reached nodes
        // are on the stack, so sigma[w] >= 1 here.
        while let Some(w) = stack.pop() {
            let coeff = 1.0 + delta[w];
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * coeff;
            }

            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    cb
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::from_edges(n, edges).expect("valid edges")
    }

    fn assert_scores(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (id, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-10, "node {id}: expected {e}, got {a}");
        }
    }

    #[test]
    fn empty_graph_returns_empty() {
        assert!(betweenness_centrality(&Graph::default()).is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        assert_scores(&betweenness_centrality(&Graph::with_nodes(1)), &[0.0]);
    }

    #[test]
    fn linear_chain_middle_node_has_betweenness() {
        // 0 → 1 → 2: 1 is on the only path 0 → 2.
        let bc = betweenness_centrality(&graph(3, &[(0, 1), (1, 2)]));
        assert_scores(&bc, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn diamond_splits_dependency() {
        // 0 → 1 → 3, 0 → 2 → 3: two shortest 0 → 3 paths.
        let bc = betweenness_centrality(&graph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]));
        assert_scores(&bc, &[0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn chain_of_four_betweenness() {
        // 1 is on 0→2 and 0→3; 2 is on 0→3 and 1→3.
        let bc = betweenness_centrality(&graph(4, &[(0, 1), (1, 2), (2, 3)]));
        assert_scores(&bc, &[0.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn star_into_sink_has_zero_betweenness() {
        let bc = betweenness_centrality(&graph(4, &[(0, 3), (1, 3), (2, 3)]));
        assert_scores(&bc, &[0.0; 4]);
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        let bc = betweenness_centrality(&graph(4, &[(0, 1), (2, 3)]));
        assert_scores(&bc, &[0.0; 4]);
    }

    #[test]
    fn directed_cycle_every_node_carries_one_pair() {
        // 0 → 1 → 2 → 0: each node is the midpoint of exactly one 2-hop path.
        let bc = betweenness_centrality(&graph(3, &[(0, 1), (1, 2), (2, 0)]));
        assert_scores(&bc, &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn parallel_edge_weights_the_route() {
        // 0 ⇉ 1 → 3 and 0 → 2 → 3: the doubled edge makes two of the three
        // shortest 0 → 3 paths run through 1.
        let bc = betweenness_centrality(&graph(4, &[(0, 1), (0, 1), (0, 2), (1, 3), (2, 3)]));
        assert_scores(&bc, &[0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0]);
    }

    #[test]
    fn shortcut_removes_intermediate_credit() {
        // 0 → 1 → 2 plus 0 → 2: the direct edge is the only shortest path.
        let bc = betweenness_centrality(&graph(3, &[(0, 1), (1, 2), (0, 2)]));
        assert_scores(&bc, &[0.0, 0.0, 0.0]);
    }
}
