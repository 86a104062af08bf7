//! `centrality stats`: summary statistics for a generated graph.

use std::io::{self, Write};

use centrality_core::GraphStats;
use centrality_core::generate::{GeneratorConfig, Termination};
use clap::Args;
use serde::Serialize;

use crate::cmd::{GeneratorArgs, build_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `centrality stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Report payload for `centrality stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub fingerprint: String,
    pub termination: Termination,
    #[serde(flatten)]
    pub stats: GraphStats,
}

/// Execute `centrality stats`.
///
/// # Errors
///
/// Returns an error if the generator config is invalid or output fails.
pub fn run_stats(
    args: &StatsArgs,
    base: &GeneratorConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let report = build_graph(&args.generator, base)?;
    let payload = StatsReport {
        fingerprint: report.graph.content_hash(),
        termination: report.termination,
        stats: GraphStats::from_graph(&report.graph),
    };
    render_mode(output, &payload, render_text, render_pretty)
}

fn fields(r: &StatsReport) -> Vec<(&'static str, String)> {
    let s = &r.stats;
    vec![
        ("nodes", s.node_count.to_string()),
        ("edges", s.edge_count.to_string()),
        ("density", format!("{:.4}", s.density)),
        ("parallel", s.parallel_edge_count.to_string()),
        ("components", s.weakly_connected_component_count.to_string()),
        ("isolated", s.isolated_node_count.to_string()),
        ("max_in", s.max_in_degree.to_string()),
        ("max_out", s.max_out_degree.to_string()),
        ("min_out", s.min_out_degree.to_string()),
        ("termination", r.termination.to_string()),
        ("fingerprint", r.fingerprint.clone()),
    ]
}

fn render_text(r: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    for (key, value) in fields(r) {
        writeln!(w, "{key}\t{value}")?;
    }
    Ok(())
}

fn render_pretty(r: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Graph statistics")?;
    for (key, value) in fields(r) {
        pretty_kv(w, key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use centrality_core::Graph;

    #[test]
    fn text_lists_every_field() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("valid edges");
        let report = StatsReport {
            fingerprint: g.content_hash(),
            termination: Termination::SourcesExhausted,
            stats: GraphStats::from_graph(&g),
        };
        let mut buf = Vec::new();
        render_text(&report, &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("nodes\t3\nedges\t2\n"));
        assert!(text.contains("components\t1\n"));
        assert!(text.contains("termination\tsources_exhausted\n"));
    }

    #[test]
    fn json_flattens_stats() {
        let g = Graph::with_nodes(2);
        let report = StatsReport {
            fingerprint: g.content_hash(),
            termination: Termination::RetryLimit,
            stats: GraphStats::from_graph(&g),
        };
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["node_count"], 2);
        assert_eq!(value["isolated_node_count"], 2);
        assert_eq!(value["termination"], "retry_limit");
    }
}
