use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BanditError {
    #[error("Invalid bandit configuration: {0}")]
    Validation(String),
    #[error("Invalid arm index {arm} for a bandit with {arms} arms")]
    OutOfRange { arm: usize, arms: usize },
    #[error("Bandit invariant violated: {0}")]
    InvariantViolation(String),
    #[error("Cannot sample reward: {0}")]
    Sampling(String),
}
