pub mod generate;
pub mod score;
pub mod stats;

use anyhow::{Context, Result};
use centrality_core::generate::{GenerationReport, GeneratorConfig};
use clap::Args;

/// Generator flags shared by every command that builds a graph.
///
/// Each flag overrides the matching `[generator]` value from the config file.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorArgs {
    /// Number of nodes.
    #[arg(short = 'n', long)]
    pub nodes: Option<usize>,

    /// Keep adding outgoing edges to nodes whose out-degree is at most this.
    #[arg(long = "min-out")]
    pub min_out: Option<usize>,

    /// Only nodes with out-degree at most this may receive edges.
    #[arg(long = "max-out", conflicts_with = "unbounded")]
    pub max_out: Option<usize>,

    /// Remove any configured target bound.
    #[arg(long)]
    pub unbounded: bool,

    /// RNG seed for a reproducible graph.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GeneratorArgs {
    /// Layer these flags over `base`.
    #[must_use]
    pub fn apply(&self, base: &GeneratorConfig) -> GeneratorConfig {
        let mut config = base.clone();
        if let Some(nodes) = self.nodes {
            config.node_count = nodes;
        }
        if let Some(min) = self.min_out {
            config.min_out_degree = min;
        }
        if self.unbounded {
            config.max_out_degree = None;
        } else if let Some(max) = self.max_out {
            config.max_out_degree = Some(max);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}

/// Build the effective generator config and run it.
///
/// # Errors
///
/// Returns an error if the merged configuration is invalid.
pub fn build_graph(args: &GeneratorArgs, base: &GeneratorConfig) -> Result<GenerationReport> {
    let config = args.apply(base);
    centrality_core::generate::generate(&config).context("graph generation failed")
}
