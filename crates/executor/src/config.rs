use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub total_nodes: usize,
    /// Probability of an edge between any vertex pair, in (0, 1].
    pub density: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Mirror every generated edge. MST comparisons expect this.
    pub symmetric: bool,
    /// Fixed RNG seed; omit for an OS-seeded run.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComparisonConfig {
    pub tolerance: f64,
    pub sssp_source: usize,
    pub max_display_rows: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub comparison: ComparisonConfig,
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
