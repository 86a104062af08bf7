//! Property tests over randomly generated graphs.

use centrality_core::generate::{GeneratorConfig, Termination, generate, generate_with};
use centrality_core::{Graph, Metric, compute};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (0usize..24, 0usize..4, proptest::option::of(0usize..4), any::<u64>()).prop_map(
        |(n, min, max, seed)| {
            let mut config = GeneratorConfig::new(n, min, max).with_seed(seed);
            config.max_self_pair_retries = 64;
            config
        },
    )
}

fn run(config: &GeneratorConfig) -> centrality_core::GenerationReport {
    generate(config).expect("strategy only yields valid configs")
}

proptest! {
    #[test]
    fn generated_graphs_satisfy_invariants(config in config_strategy()) {
        let report = run(&config);
        let g = &report.graph;

        prop_assert_eq!(g.node_count(), config.node_count);
        prop_assert!(g.validate().is_ok());
        for edge in g.edges() {
            prop_assert!(edge.from < g.node_count());
            prop_assert!(edge.to < g.node_count());
            prop_assert_ne!(edge.from, edge.to);
        }
    }

    #[test]
    fn termination_reason_matches_final_state(config in config_strategy()) {
        let report = run(&config);
        let g = &report.graph;
        match report.termination {
            Termination::SourcesExhausted => {
                prop_assert!(g.source_candidates(config.min_out_degree).is_empty());
                prop_assert!(g.nodes().iter().all(|n| n.out_degree() > config.min_out_degree));
            }
            Termination::TargetsExhausted => {
                prop_assert!(g.target_candidates(config.max_out_degree).is_empty());
            }
            Termination::RetryLimit => {
                prop_assert!(report.self_pair_rejections >= config.max_self_pair_retries);
            }
        }
    }

    #[test]
    fn unbounded_targets_always_exhaust_sources(n in 2usize..24, min in 0usize..4, seed in any::<u64>()) {
        let report = generate_with(&GeneratorConfig::new(n, min, None), &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(report.termination, Termination::SourcesExhausted);
        prop_assert_eq!(report.graph.edge_count(), n * (min + 1));
    }

    #[test]
    fn seeded_generation_is_reproducible(config in config_strategy()) {
        prop_assert_eq!(run(&config).graph.content_hash(), run(&config).graph.content_hash());
    }

    #[test]
    fn degree_equals_adjacency_sizes(config in config_strategy()) {
        let g = run(&config).graph;
        let scores = compute(Metric::Degree, &g);
        for node in g.nodes() {
            #[allow(clippy::cast_precision_loss)]
            let expected = (node.edges_in.len() + node.edges_out.len()) as f64;
            prop_assert_eq!(scores[node.id], expected);
        }
    }

    #[test]
    fn metrics_score_every_node_and_are_pure(config in config_strategy()) {
        let g = run(&config).graph;
        let before = g.clone();
        for metric in Metric::ALL {
            let first = compute(metric, &g);
            prop_assert_eq!(first.len(), g.node_count());
            prop_assert_eq!(&first, &compute(metric, &g));
        }
        prop_assert_eq!(g, before);
    }

    #[test]
    fn betweenness_is_finite_and_non_negative(config in config_strategy()) {
        let g = run(&config).graph;
        for (_, score) in compute(Metric::Betweenness, &g).iter() {
            prop_assert!(score.is_finite());
            prop_assert!(score >= 0.0);
        }
    }

    #[test]
    fn closeness_is_positive_for_graphs_with_two_or_more_nodes(config in config_strategy()) {
        let g = run(&config).graph;
        prop_assume!(g.node_count() >= 2);
        for (_, score) in compute(Metric::Closeness, &g).iter() {
            prop_assert!(score > 0.0);
        }
    }
}

#[test]
fn betweenness_matches_brute_force_on_small_graphs() {
    // Cross-check Brandes against explicit shortest-path enumeration.
    for seed in 0..25 {
        let config = GeneratorConfig::new(7, 1, None);
        let g = generate_with(&config, &mut StdRng::seed_from_u64(seed)).graph;
        let fast = compute(Metric::Betweenness, &g);
        let slow = brute_force_betweenness(&g);
        for (id, expected) in slow.iter().enumerate() {
            assert!(
                (fast[id] - expected).abs() < 1e-9,
                "seed {seed}, node {id}: brandes {} vs brute force {expected}",
                fast[id]
            );
        }
    }
}

/// For every ordered pair (s, t) count shortest s→t paths, and how many of
/// them pass through each intermediate node, by dynamic programming over
/// BFS layers in both directions.
#[allow(clippy::cast_precision_loss)]
fn brute_force_betweenness(g: &Graph) -> Vec<f64> {
    let n = g.node_count();
    let dist: Vec<Vec<Option<usize>>> = (0..n)
        .map(|s| centrality_core::metrics::closeness::bfs_distances(g, s))
        .collect();

    // paths[s][t]: number of shortest s→t walks (parallel edges distinct).
    let mut paths = vec![vec![0u64; n]; n];
    for s in 0..n {
        let mut order: Vec<usize> = (0..n).filter(|&t| dist[s][t].is_some()).collect();
        order.sort_by_key(|&t| dist[s][t]);
        paths[s][s] = 1;
        for &v in &order {
            for &w in g.out_neighbors(v) {
                if dist[s][w] == dist[s][v].map(|d| d + 1) {
                    paths[s][w] += paths[s][v];
                }
            }
        }
    }

    let mut cb = vec![0.0; n];
    for s in 0..n {
        for t in 0..n {
            let Some(dst) = dist[s][t] else { continue };
            if s == t {
                continue;
            }
            for v in 0..n {
                if v == s || v == t {
                    continue;
                }
                if let (Some(dsv), Some(dvt)) = (dist[s][v], dist[v][t]) {
                    if dsv + dvt == dst {
                        cb[v] += (paths[s][v] * paths[v][t]) as f64 / paths[s][t] as f64;
                    }
                }
            }
        }
    }
    cb
}
