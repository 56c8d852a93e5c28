use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Invalid agent configuration: {0}")]
    Validation(String),
}
