//! Summary statistics for a generated graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: raw sizes, parallel edges included.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Parallel
//!   edges can push this above 1.0. Zero for graphs with fewer than 2 nodes.
//! - **parallel_edge_count**: edges beyond the first for each ordered
//!   `(from, to)` pair.
//! - **weakly_connected_component_count**: components when edge direction
//!   is ignored.
//! - **isolated_node_count**: nodes with neither in- nor out-edges.
//! - **max_in_degree** / **max_out_degree** / **min_out_degree**: degree
//!   extremes; the minimum out-degree is what the generator's lower bound
//!   drives.

use std::collections::HashSet;

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::model::Graph;

/// Summary statistics computed by [`GraphStats::from_graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub parallel_edge_count: usize,
    pub weakly_connected_component_count: usize,
    pub isolated_node_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    pub min_out_degree: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let density = if node_count < 2 {
            0.0
        } else {
            edge_count as f64 / (node_count * (node_count - 1)) as f64
        };

        let distinct: HashSet<_> = graph.edges().iter().copied().collect();
        let parallel_edge_count = edge_count - distinct.len();

        let weakly_connected_component_count = if node_count == 0 {
            0
        } else {
            connected_components(&graph.to_digraph())
        };

        let nodes = graph.nodes();
        let isolated_node_count = nodes.iter().filter(|n| n.degree() == 0).count();
        let max_in_degree = nodes.iter().map(|n| n.in_degree()).max().unwrap_or(0);
        let max_out_degree = nodes.iter().map(|n| n.out_degree()).max().unwrap_or(0);
        let min_out_degree = nodes.iter().map(|n| n.out_degree()).min().unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density,
            parallel_edge_count,
            weakly_connected_component_count,
            isolated_node_count,
            max_in_degree,
            max_out_degree,
            min_out_degree,
        }
    }
}
