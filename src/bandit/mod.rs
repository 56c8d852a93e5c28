mod distribution;
pub mod errors;
mod model;

pub use distribution::DistType;
pub use model::{Bandit, Initialization, RewardModel};
