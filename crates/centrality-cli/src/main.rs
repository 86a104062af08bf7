#![forbid(unsafe_code)]

mod cmd;
mod config;
mod normalize;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "centrality: random directed graphs and node centrality scores",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file (defaults to ./centrality.toml, then the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Generate a random directed graph",
        long_about = "Generate a random directed graph under out-degree bounds and print its adjacency.",
        after_help = "EXAMPLES:\n    # 16 nodes, every node gets two outgoing edges\n    centrality generate\n\n    # Reproducible graph\n    centrality generate --nodes 32 --min-out 2 --seed 7 --json"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        about = "Score nodes by centrality",
        long_about = "Generate a graph and print degree, closeness and/or betweenness scores for every node.",
        after_help = "EXAMPLES:\n    # All three metrics\n    centrality score --seed 1\n\n    # Betweenness only, with a [0, 1] column\n    centrality score --metric betweenness --normalize"
    )]
    Score(cmd::score::ScoreArgs),

    #[command(
        about = "Show graph statistics",
        long_about = "Generate a graph and print density, degree extremes and component counts.",
        after_help = "EXAMPLES:\n    centrality stats --nodes 100 --min-out 3"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    centrality completions bash"
    )]
    Completions {
        /// Target shell for completion script generation.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CENTRALITY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "centrality=debug,centrality_core=debug,info"
        } else {
            "centrality=info,centrality_core=info,warn"
        })
    });

    let format = env::var("CENTRALITY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    // Logs go to stderr so stdout stays parseable in JSON mode.
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &project_root)?;
    let output = output::resolve_output_mode(cli.format, cli.json, config.output.format);
    debug!(?output, generator = ?config.generator, "resolved configuration");

    match cli.command {
        Commands::Generate(ref args) => {
            cmd::generate::run_generate(args, &config.generator, output)
        }
        Commands::Score(ref args) => cmd::score::run_score(args, &config.generator, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &config.generator, output),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "centrality", &mut std::io::stdout());
            Ok(())
        }
    }
}
