use crate::simulation::errors::SimulationError;

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("Failed to serialize experiment summaries to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
