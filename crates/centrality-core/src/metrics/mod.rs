//! Node centrality metrics.
//!
//! # Overview
//!
//! Each metric answers a different question about a node's importance:
//!
//! - **Degree** (`degree`): how many edges touch the node?
//! - **Closeness** (`closeness`): how few hops does the node need to reach
//!   everything it can reach?
//! - **Betweenness** (`betweenness`): how often does the node sit on
//!   shortest paths between other nodes?
//!
//! # Usage
//!
//! All metrics borrow a [`Graph`] and return fresh [`Scores`] indexed by
//! node id. Nothing is written back into the graph, so running the same
//! metric twice yields identical results and switching metrics can never
//! leak stale values.
//!
//! ```rust
//! use centrality_core::{Graph, Metric, compute};
//!
//! let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("valid edges");
//! let bc = compute(Metric::Betweenness, &g);
//! assert_eq!(bc[1], 1.0);
//! ```
//!
//! Scores are raw: no normalization is applied. Presentation layers that
//! want a `[0, 1]` range rescale on their side.

pub mod betweenness;
pub mod closeness;
pub mod degree;

use std::collections::BTreeMap;
use std::fmt;
use std::iter::{Copied, Enumerate};
use std::ops::Index;
use std::slice;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Graph;

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// The closed set of supported centrality metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Degree,
    Closeness,
    Betweenness,
}

type Scorer = fn(&Graph) -> Vec<f64>;

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Self; 3] = [Self::Degree, Self::Closeness, Self::Betweenness];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Closeness => "closeness",
            Self::Betweenness => "betweenness",
        }
    }

    /// The scoring function backing this metric.
    #[must_use]
    pub const fn scorer(self) -> Scorer {
        match self {
            Self::Degree => degree::degree_centrality,
            Self::Closeness => closeness::closeness_centrality,
            Self::Betweenness => betweenness::betweenness_centrality,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" => Ok(Self::Degree),
            "closeness" => Ok(Self::Closeness),
            "betweenness" => Ok(Self::Betweenness),
            _ => Err(GraphError::UnknownMetric(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Per-node scores produced by one metric run, indexed by node id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scores {
    metric: Metric,
    values: Vec<f64>,
}

impl Scores {
    #[must_use]
    pub const fn new(metric: Metric, values: Vec<f64>) -> Self {
        Self { metric, values }
    }

    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<f64> {
        self.values.get(id).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `(node_id, score)` pairs in id order.
    pub fn iter(&self) -> ScoresIter<'_> {
        self.values.iter().copied().enumerate()
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<usize, f64> {
        self.values.into_iter().enumerate().collect()
    }

    /// Node ids ordered by descending score; ties keep ascending id order.
    #[must_use]
    pub fn ranked(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = (0..self.values.len()).collect();
        ids.sort_by(|&a, &b| self.values[b].total_cmp(&self.values[a]).then(a.cmp(&b)));
        ids
    }
}

/// Iterator over `(node_id, score)` pairs.
pub type ScoresIter<'a> = Enumerate<Copied<slice::Iter<'a, f64>>>;

impl<'a> IntoIterator for &'a Scores {
    type Item = (usize, f64);
    type IntoIter = ScoresIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Scores {
    type Output = f64;

    fn index(&self, id: usize) -> &f64 {
        &self.values[id]
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Score every node of `graph` under `metric`.
#[must_use]
pub fn compute(metric: Metric, graph: &Graph) -> Scores {
    Scores::new(metric, (metric.scorer())(graph))
}

/// `|edges_in| + |edges_out|` per node.
#[must_use]
pub fn compute_degree(graph: &Graph) -> Scores {
    compute(Metric::Degree, graph)
}

/// `(N - 1) / sum(finite BFS distances)` per node.
#[must_use]
pub fn compute_closeness(graph: &Graph) -> Scores {
    compute(Metric::Closeness, graph)
}

/// Unnormalized Brandes betweenness per node.
#[must_use]
pub fn compute_betweenness(graph: &Graph) -> Scores {
    compute(Metric::Betweenness, graph)
}
