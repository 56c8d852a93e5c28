mod agent;
pub mod arm;
mod decaying_epsilon_greedy;
mod epsilon_greedy;
pub mod errors;
mod etc;
mod ucb;

pub use agent::{Agent, AgentType};
pub use arm::Arms;
pub use decaying_epsilon_greedy::DecayingEpsilonGreedy;
pub use epsilon_greedy::{EpsilonGreedy, Greedy};
pub use etc::ExploreThenCommit;
pub use ucb::{SubGaussianUcb, Ucb, Ucb1};
