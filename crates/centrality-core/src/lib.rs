#![forbid(unsafe_code)]
//! centrality-core library.
//!
//! Random directed graph generation under out-degree bounds, and three
//! node-level centrality metrics computed over the result.
//!
//! # Conventions
//!
//! - **Errors**: construction and configuration return [`Result`] with a
//!   [`GraphError`]; the metrics themselves are infallible.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Typical Usage
//!
//! ```rust
//! use centrality_core::{Metric, compute, generate_graph};
//!
//! let graph = generate_graph(16, 1, None);
//! let scores = compute(Metric::Betweenness, &graph);
//! assert_eq!(scores.len(), 16);
//! ```

pub mod error;
pub mod generate;
pub mod graph;
pub mod metrics;

pub use error::{GraphError, Result};
pub use generate::{GenerationReport, GeneratorConfig, Termination, generate_graph};
pub use graph::{Edge, Graph, GraphStats, Node};
pub use metrics::{
    Metric, Scores, compute, compute_betweenness, compute_closeness, compute_degree,
};
