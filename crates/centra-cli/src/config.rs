//! TOML configuration for the `centra` binary.
//!
//! Resolution order (later wins): built-in defaults, then the user config at
//! `<config_dir>/centra/config.toml` or the file given with `--config`, then
//! command-line flags. A missing user config means defaults; a missing
//! `--config` file is an error.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use centra_analysis::{PowerIterationConfig, StopCondition, WeightPolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    pub tolerance: f64,
    pub max_time_ms: u64,
    /// When set, power iteration stops after this many steps instead of on
    /// the wall-clock deadline.
    pub max_iterations: Option<usize>,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            tolerance: centra_analysis::power::DEFAULT_TOLERANCE,
            max_time_ms: 1000,
            max_iterations: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub invert: bool,
    pub normalize: bool,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            invert: true,
            normalize: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `pretty`, `text`, or `json`.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub eigenvector: EigenvectorConfig,
    pub weights: WeightsConfig,
    pub output: OutputConfig,
}

impl EigenvectorConfig {
    /// An iteration cap, when set, takes precedence over the deadline.
    #[must_use]
    pub fn power_iteration(&self) -> PowerIterationConfig {
        let stop = self.max_iterations.map_or_else(
            || StopCondition::Deadline(Duration::from_millis(self.max_time_ms)),
            StopCondition::Iterations,
        );
        PowerIterationConfig {
            tolerance: self.tolerance,
            stop,
            cancel: None,
        }
    }
}

impl Config {
    /// Power-iteration settings for eigenvector centrality.
    #[must_use]
    pub fn power_iteration(&self) -> PowerIterationConfig {
        self.eigenvector.power_iteration()
    }

    #[must_use]
    pub const fn weight_policy(&self) -> WeightPolicy {
        WeightPolicy {
            invert: self.weights.invert,
            normalize: self.weights.normalize,
        }
    }

    /// The configured output mode, if it names a known one.
    #[must_use]
    pub fn output_mode(&self) -> Option<OutputMode> {
        match self.output.format.as_deref()?.to_lowercase().as_str() {
            "pretty" => Some(OutputMode::Pretty),
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Load configuration from `explicit` if given, else from the user config.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => load_user_config(),
    }
}

pub fn load_user_config() -> Result<Config> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };

    let path = config_dir.join("centra/config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_file(&path)
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
