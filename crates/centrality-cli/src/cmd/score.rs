//! `centrality score`: generate a graph and print per-node centrality.

use std::io::{self, Write};

use centrality_core::generate::GeneratorConfig;
use centrality_core::{Graph, Metric, Scores, compute};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::cmd::{GeneratorArgs, build_graph};
use crate::normalize::min_max;
use crate::output::{OutputMode, fmt_score, pretty_kv, pretty_section, render_mode};

/// Arguments for `centrality score`.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Metric to compute: degree, closeness or betweenness. All when omitted.
    #[arg(short, long)]
    pub metric: Option<Metric>,

    /// Add a min-max rescaled column in [0, 1].
    #[arg(long)]
    pub normalize: bool,
}

impl ScoreArgs {
    fn metrics(&self) -> Vec<Metric> {
        self.metric.map_or_else(|| Metric::ALL.to_vec(), |m| vec![m])
    }
}

#[derive(Debug, Serialize)]
pub struct NodeScore {
    pub id: usize,
    /// Raw score. Serialized as `null` when infinite.
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MetricScores {
    pub metric: Metric,
    pub scores: Vec<NodeScore>,
}

/// Report payload for `centrality score`.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub fingerprint: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub metrics: Vec<MetricScores>,
}

impl ScoreReport {
    /// Score `graph` under each of `metrics`.
    #[must_use]
    pub fn build(graph: &Graph, metrics: &[Metric], normalize: bool) -> Self {
        let metrics = metrics
            .iter()
            .map(|&metric| {
                let scores = compute(metric, graph);
                debug!(%metric, top = ?scores.ranked().first(), "scored graph");
                to_metric_scores(&scores, normalize)
            })
            .collect();

        Self {
            fingerprint: graph.content_hash(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            metrics,
        }
    }
}

fn to_metric_scores(scores: &Scores, normalize: bool) -> MetricScores {
    let normalized = normalize.then(|| min_max(scores.as_slice()));
    MetricScores {
        metric: scores.metric(),
        scores: scores
            .iter()
            .map(|(id, score)| NodeScore {
                id,
                score,
                normalized: normalized.as_ref().map(|n| n[id]),
            })
            .collect(),
    }
}

/// Execute `centrality score`.
///
/// # Errors
///
/// Returns an error if the generator config is invalid or output fails.
pub fn run_score(
    args: &ScoreArgs,
    base: &GeneratorConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let generated = build_graph(&args.generator, base)?;
    let report = ScoreReport::build(&generated.graph, &args.metrics(), args.normalize);
    render_mode(output, &report, render_text, render_pretty)
}

fn header(report: &ScoreReport, sep: &str) -> String {
    let mut cols = vec!["id".to_string()];
    for m in &report.metrics {
        cols.push(m.metric.to_string());
        if m.scores.first().is_some_and(|s| s.normalized.is_some()) {
            cols.push(format!("{}_norm", m.metric));
        }
    }
    cols.join(sep)
}

fn row(report: &ScoreReport, id: usize, sep: &str, width: usize) -> String {
    let mut cols = vec![format!("{id:>width$}")];
    for m in &report.metrics {
        let s = &m.scores[id];
        cols.push(format!("{:>width$}", fmt_score(s.score)));
        if let Some(n) = s.normalized {
            cols.push(format!("{:>width$}", fmt_score(n)));
        }
    }
    cols.join(sep)
}

fn render_text(report: &ScoreReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", header(report, "\t"))?;
    for id in 0..report.node_count {
        writeln!(w, "{}", row(report, id, "\t", 0))?;
    }
    Ok(())
}

fn render_pretty(report: &ScoreReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Centrality")?;
    pretty_kv(w, "nodes", report.node_count.to_string())?;
    pretty_kv(w, "edges", report.edge_count.to_string())?;
    pretty_kv(w, "fingerprint", &report.fingerprint)?;
    writeln!(w)?;

    let cols: Vec<String> = header(report, "\t")
        .split('\t')
        .map(|c| format!("{c:>12}"))
        .collect();
    writeln!(w, "{}", cols.join(" "))?;
    for id in 0..report.node_count {
        writeln!(w, "{}", row(report, id, " ", 12))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).expect("valid edges")
    }

    #[test]
    fn metrics_default_to_all() {
        assert_eq!(ScoreArgs::default().metrics(), Metric::ALL.to_vec());
        let args = ScoreArgs {
            metric: Some(Metric::Closeness),
            ..ScoreArgs::default()
        };
        assert_eq!(args.metrics(), vec![Metric::Closeness]);
    }

    #[test]
    fn report_has_one_score_per_node() {
        let report = ScoreReport::build(&path(), &Metric::ALL, false);
        assert_eq!(report.metrics.len(), 3);
        for m in &report.metrics {
            assert_eq!(m.scores.len(), 4);
            assert!(m.scores.iter().all(|s| s.normalized.is_none()));
        }
    }

    #[test]
    fn normalized_column_is_in_unit_range() {
        let report = ScoreReport::build(&path(), &[Metric::Betweenness], true);
        let norm: Vec<f64> = report.metrics[0]
            .scores
            .iter()
            .filter_map(|s| s.normalized)
            .collect();
        assert_eq!(norm, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn text_output_has_header_and_rows() {
        let report = ScoreReport::build(&path(), &[Metric::Degree, Metric::Closeness], true);
        let mut buf = Vec::new();
        render_text(&report, &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id\tdegree\tdegree_norm\tcloseness\tcloseness_norm");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "0\t1.0000\t0.0000\t0.5000\t0.0000");
        assert!(lines[4].ends_with("\tinf\t1.0000"));
    }

    #[test]
    fn json_turns_infinity_into_null() {
        let report = ScoreReport::build(&path(), &[Metric::Closeness], false);
        let value = serde_json::to_value(&report).expect("serialize");
        assert!(value["metrics"][0]["scores"][3]["score"].is_null());
        assert_eq!(value["metrics"][0]["metric"], "closeness");
    }
}
