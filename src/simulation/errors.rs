use crate::agents::errors::AgentError;
use crate::bandit::errors::BanditError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error("Invalid simulation setup: {0}")]
    Validation(String),
}
