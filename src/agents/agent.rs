use super::arm::Arms;
use super::decaying_epsilon_greedy::DecayingEpsilonGreedy;
use super::epsilon_greedy::{EpsilonGreedy, Greedy};
use super::errors::AgentError;
use super::etc::ExploreThenCommit;
use super::ucb::{SubGaussianUcb, Ucb, Ucb1};

use serde::{Deserialize, Serialize};

/// Online arm selection strategy that only sees the rewards it was given.
///
/// An agent is meant for a single run: its statistics are never reset.
pub trait Agent {
    fn name(&self) -> &'static str;
    fn select_arm(&mut self) -> usize;
    fn arms(&self) -> &Arms;
    fn arms_mut(&mut self) -> &mut Arms;

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), AgentError> {
        self.arms_mut().update(arm_id, reward)
    }

    fn estimates(&self) -> &[f64] {
        self.arms().values()
    }

    fn counts(&self) -> &[u64] {
        self.arms().counts()
    }
}

/// Strategy and hyperparameters of an agent, as read from configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentType {
    Greedy,
    EpsilonGreedy {
        epsilon: f64,
    },
    ExploreThenCommit {
        m: u64,
        horizon: u64,
    },
    DecayingEpsilonGreedy {
        /// exploration scale
        c: f64,
        /// assumed minimum reward gap
        d: f64,
    },
    Ucb1,
    Ucb {
        delta: f64,
    },
    SubGaussianUcb {
        sigma: f64,
    },
}

impl AgentType {
    /// Builds a fresh agent over `k` arms. Deterministic strategies ignore `seed`.
    pub fn build(&self, k: usize, seed: Option<u64>) -> Result<Box<dyn Agent + Send>, AgentError> {
        let agent: Box<dyn Agent + Send> = match *self {
            AgentType::Greedy => Box::new(Greedy::new(k)?),
            AgentType::EpsilonGreedy { epsilon } => Box::new(EpsilonGreedy::new(k, epsilon, seed)?),
            AgentType::ExploreThenCommit { m, horizon } => {
                Box::new(ExploreThenCommit::new(k, m, horizon)?)
            }
            AgentType::DecayingEpsilonGreedy { c, d } => {
                Box::new(DecayingEpsilonGreedy::new(k, c, d, seed)?)
            }
            AgentType::Ucb1 => Box::new(Ucb1::new(k)?),
            AgentType::Ucb { delta } => Box::new(Ucb::new(k, delta)?),
            AgentType::SubGaussianUcb { sigma } => Box::new(SubGaussianUcb::new(k, sigma)?),
        };

        Ok(agent)
    }
}

pub(super) fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), AgentError> {
    if condition {
        Ok(())
    } else {
        Err(AgentError::Validation(message()))
    }
}
