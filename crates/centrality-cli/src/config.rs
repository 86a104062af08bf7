//! Configuration file loading.
//!
//! Lookup order, first hit wins:
//! 1. `--config <path>` (must exist)
//! 2. `./centrality.toml`
//! 3. `<config_dir>/centrality/config.toml`
//! 4. built-in defaults
//!
//! ```toml
//! [generator]
//! node_count = 32
//! min_out_degree = 2
//! seed = 7
//!
//! [output]
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use centrality_core::GeneratorConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputMode;

pub const PROJECT_CONFIG_FILE: &str = "centrality.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputMode>,
}

/// Resolve and load the effective configuration.
///
/// # Errors
///
/// Returns an error if an explicit path is missing, or if any config file
/// that exists cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<CliConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        return read_config(path);
    }

    for candidate in candidate_paths(project_root) {
        if candidate.exists() {
            return read_config(&candidate);
        }
    }

    debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn candidate_paths(project_root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("centrality/config.toml"));
    }
    paths
}

fn read_config(path: &Path) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<CliConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    config
        .generator
        .validate()
        .with_context(|| format!("Invalid [generator] section in {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_file_is_picked_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[generator]\nnode_count = 5\nseed = 3\n\n[output]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = load_config(None, dir.path()).expect("load");
        assert_eq!(config.generator.node_count, 5);
        assert_eq!(config.generator.seed, Some(3));
        // Unspecified fields keep their defaults.
        assert_eq!(config.generator.min_out_degree, 1);
        assert_eq!(config.output.format, Some(OutputMode::Json));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing), dir.path()).expect_err("missing file");
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_path_beats_project_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[generator]\nnode_count = 5\n")
            .expect("write config");
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[generator]\nnode_count = 9\n").expect("write config");

        let config = load_config(Some(&explicit), dir.path()).expect("load");
        assert_eq!(config.generator.node_count, 9);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[generator\nnode_count = ").expect("write config");

        let err = load_config(None, dir.path()).expect_err("bad toml");
        assert!(format!("{err:#}").contains("centrality.toml"));
    }

    #[test]
    fn invalid_generator_values_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[generator]\nmax_self_pair_retries = 0\n",
        )
        .expect("write config");

        let err = load_config(None, dir.path()).expect_err("invalid config");
        assert!(format!("{err:#}").contains("max_self_pair_retries"));
    }
}
