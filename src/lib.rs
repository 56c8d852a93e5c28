pub mod agents;
pub mod bandit;
pub mod config;
pub mod errors;
pub mod rng;
pub mod simulation;
pub mod stats;
