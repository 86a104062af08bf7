//! Random directed graph generation under out-degree bounds.
//!
//! # Algorithm
//!
//! Starting from `node_count` isolated nodes, repeatedly:
//!
//! 1. Pick a source uniformly among nodes with out-degree `<= min_out_degree`.
//! 2. Pick a target uniformly among nodes with out-degree `<= max_out_degree`
//!    (any node when the bound is `None`).
//! 3. If both picks are the same node, reject the pair and draw again.
//! 4. Otherwise add `source → target`.
//!
//! Generation stops when either candidate set is empty. With an unbounded
//! target set every node ends with out-degree exactly `min_out_degree + 1`
//! (for `node_count >= 2`). A bounded target set shrinks to a single node
//! that can only pair with itself, so those runs end on the retry guard.
//!
//! Parallel edges are allowed and connectivity is not guaranteed.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Upper bound on `node_count` accepted by [`GeneratorConfig::validate`].
pub const MAX_NODE_COUNT: usize = 100_000;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of nodes to create.
    pub node_count: usize,
    /// Nodes keep receiving outgoing edges while their out-degree is at
    /// most this value.
    pub min_out_degree: usize,
    /// Nodes stop being eligible targets once their out-degree exceeds
    /// this value. `None` means unbounded.
    pub max_out_degree: Option<usize>,
    /// RNG seed for reproducible graphs. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Consecutive self-pair rejections tolerated before giving up.
    pub max_self_pair_retries: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 16,
            min_out_degree: 1,
            max_out_degree: None,
            seed: None,
            max_self_pair_retries: 1024,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given bounds and default seed/retry settings.
    #[must_use]
    pub fn new(node_count: usize, min_out_degree: usize, max_out_degree: Option<usize>) -> Self {
        Self {
            node_count,
            min_out_degree,
            max_out_degree,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration before running.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `node_count` exceeds
    /// [`MAX_NODE_COUNT`] or `max_self_pair_retries` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.node_count > MAX_NODE_COUNT {
            return Err(GraphError::InvalidConfig(format!(
                "node_count must be <= {MAX_NODE_COUNT}, got {}",
                self.node_count
            )));
        }
        if self.max_self_pair_retries == 0 {
            return Err(GraphError::InvalidConfig(
                "max_self_pair_retries must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Why the generator stopped adding edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every node's out-degree exceeds `min_out_degree`.
    SourcesExhausted,
    /// Every node's out-degree exceeds `max_out_degree`.
    TargetsExhausted,
    /// Too many consecutive source/target draws landed on the same node.
    RetryLimit,
}

impl Termination {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourcesExhausted => "sources_exhausted",
            Self::TargetsExhausted => "targets_exhausted",
            Self::RetryLimit => "retry_limit",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished graph plus how its construction ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub graph: Graph,
    pub termination: Termination,
    /// Total self-pair draws discarded over the whole run.
    pub self_pair_rejections: usize,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Generate a graph with `node_count` nodes and the given out-degree bounds.
///
/// Uses OS entropy for randomness and the default retry guard. Never fails:
/// exhaustion simply yields a sparser graph.
#[must_use]
pub fn generate_graph(
    node_count: usize,
    min_out_degree: usize,
    max_out_degree: Option<usize>,
) -> Graph {
    let config = GeneratorConfig::new(node_count, min_out_degree, max_out_degree);
    generate_with(&config, &mut StdRng::from_entropy()).graph
}

/// Validate `config` and generate, seeding from `config.seed` when present.
///
/// # Errors
///
/// Returns [`GraphError::InvalidConfig`] if validation fails.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    Ok(generate_with(config, &mut rng))
}

/// Generate using the caller's RNG. Deterministic for a deterministic `rng`.
#[instrument(skip(config, rng), fields(node_count = config.node_count, min = config.min_out_degree, max = ?config.max_out_degree))]
pub fn generate_with<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> GenerationReport {
    let mut graph = Graph::with_nodes(config.node_count);
    let mut self_pair_rejections = 0usize;
    let mut consecutive_rejections = 0usize;

    let termination = loop {
        let sources = graph.source_candidates(config.min_out_degree);
        let Some(&from) = sources.choose(rng) else {
            break Termination::SourcesExhausted;
        };

        let targets = graph.target_candidates(config.max_out_degree);
        let Some(&to) = targets.choose(rng) else {
            break Termination::TargetsExhausted;
        };

        if from == to {
            self_pair_rejections += 1;
            consecutive_rejections += 1;
            if consecutive_rejections >= config.max_self_pair_retries {
                warn!(
                    node = from,
                    retries = consecutive_rejections,
                    "generator gave up after repeated self-pair draws"
                );
                break Termination::RetryLimit;
            }
            continue;
        }

        consecutive_rejections = 0;
        graph.connect(from, to);
    };

    debug!(
        edges = graph.edge_count(),
        %termination,
        self_pair_rejections,
        "graph generated"
    );

    GenerationReport {
        graph,
        termination,
        self_pair_rejections,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
