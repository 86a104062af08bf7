//! `centrality generate`: build a random graph and print it.

use std::io::{self, Write};

use centrality_core::generate::{GeneratorConfig, Termination};
use centrality_core::{Edge, Node};
use clap::Args;
use serde::Serialize;

use crate::cmd::{GeneratorArgs, build_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `centrality generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Report payload for `centrality generate`.
#[derive(Debug, Serialize)]
pub struct GraphPayload<'a> {
    pub fingerprint: String,
    pub termination: Termination,
    pub self_pair_rejections: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

/// Execute `centrality generate`.
///
/// # Errors
///
/// Returns an error if the generator config is invalid or output fails.
pub fn run_generate(
    args: &GenerateArgs,
    base: &GeneratorConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let report = build_graph(&args.generator, base)?;
    let graph = &report.graph;

    let payload = GraphPayload {
        fingerprint: graph.content_hash(),
        termination: report.termination,
        self_pair_rejections: report.self_pair_rejections,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes: graph.nodes(),
        edges: graph.edges(),
    };

    render_mode(output, &payload, render_text, render_pretty)
}

fn join_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn render_text(p: &GraphPayload<'_>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "id\tout\tin")?;
    for node in p.nodes {
        writeln!(
            w,
            "{}\t{}\t{}",
            node.id,
            join_ids(&node.edges_out),
            join_ids(&node.edges_in)
        )?;
    }
    Ok(())
}

fn render_pretty(p: &GraphPayload<'_>, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "nodes", p.node_count.to_string())?;
    pretty_kv(w, "edges", p.edge_count.to_string())?;
    pretty_kv(w, "termination", p.termination.as_str())?;
    pretty_kv(w, "fingerprint", &p.fingerprint)?;
    writeln!(w)?;

    pretty_section(w, "Adjacency")?;
    for node in p.nodes {
        writeln!(
            w,
            "{:>5}  → [{}]  ← [{}]",
            node.id,
            join_ids(&node.edges_out),
            join_ids(&node.edges_in)
        )?;
    }
    Ok(())
}
