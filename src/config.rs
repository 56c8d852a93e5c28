use crate::agents::AgentType;
use crate::bandit::DistType;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Bandit to build for every run. At most one of `means` and `delta` may be
/// set; with neither the arm parameters are drawn at random.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BanditConfig {
    pub arms: usize,
    pub dist_type: DistType,
    #[serde(default)]
    pub means: Option<Vec<f64>>,
    #[serde(default)]
    pub delta: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExperimentConfig {
    pub horizon: usize,
    pub runs: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub bandit: BanditConfig,
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub agents: Vec<AgentType>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("BANDIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        builder.try_deserialize()
    }
}
