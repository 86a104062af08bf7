//! Directed graph model shared by the generator and the centrality engine.
//!
//! # Overview
//!
//! A [`Graph`] owns a contiguous node collection (ids `0..N`) and an edge
//! list. Each [`Node`] carries its outgoing and incoming neighbor ids so
//! traversals never have to scan the edge list.
//!
//! ## Pipeline
//!
//! ```text
//! GeneratorConfig
//!        ↓  generate::generate()
//! Graph (nodes + edges, invariants hold)
//!        ↓  metrics::compute(metric, &graph)
//! Scores (one f64 per node id)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, components, degree extremes, …)
//! ```
//!
//! ## Fingerprints
//!
//! [`Graph::content_hash`] is a BLAKE3 hash of the node count and edge list.
//! Two graphs with the same fingerprint are structurally identical, which
//! makes it a cheap way to confirm a seeded run reproduced the same graph.

pub mod model;
pub mod stats;

pub use model::{Edge, Graph, Node};
pub use stats::GraphStats;
