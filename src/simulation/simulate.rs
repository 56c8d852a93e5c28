use super::errors::SimulationError;

use crate::agents::Agent;
use crate::bandit::errors::BanditError;
use crate::bandit::{DistType, RewardModel};

use serde::Serialize;
use tracing::debug;

/// Per-round trace of a single run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimulationResult {
    pub rewards: Vec<f64>,
    /// Cumulative regret up to and including each round. Always zero for
    /// bernoulli bandits, only gaussian regret is tracked.
    pub regret: Vec<f64>,
    /// 1 when the true best arm was chosen, 0 otherwise.
    pub optimal_choices: Vec<u8>,
    /// Agent estimates after each round's update.
    pub estimates: Vec<Vec<f64>>,
}

impl SimulationResult {
    fn with_capacity(horizon: usize) -> Self {
        Self {
            rewards: Vec::with_capacity(horizon),
            regret: Vec::with_capacity(horizon),
            optimal_choices: Vec::with_capacity(horizon),
            estimates: Vec::with_capacity(horizon),
        }
    }

    pub fn horizon(&self) -> usize {
        self.rewards.len()
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn final_regret(&self) -> f64 {
        self.regret.last().copied().unwrap_or_default()
    }

    /// Fraction of rounds in which the true best arm was chosen.
    pub fn optimal_rate(&self) -> f64 {
        if self.optimal_choices.is_empty() {
            return 0.0;
        }
        let optimal = self.optimal_choices.iter().map(|&c| c as usize).sum::<usize>();
        optimal as f64 / self.optimal_choices.len() as f64
    }
}

/// Plays `horizon` rounds of `agent` against `model`.
///
/// Any error from either side aborts the run, no partial result is returned.
pub fn simulate<M, A>(
    model: &mut M,
    agent: &mut A,
    horizon: usize,
) -> Result<SimulationResult, SimulationError>
where
    M: RewardModel + ?Sized,
    A: Agent + ?Sized,
{
    if agent.arms().len() != model.arms() {
        return Err(SimulationError::Validation(format!(
            "agent has {} arms but the bandit has {}",
            agent.arms().len(),
            model.arms()
        )));
    }

    let optimal_arm = model.optimal_arm();
    let optimal_value = model.optimal_value();
    let mut result = SimulationResult::with_capacity(horizon);
    let mut cumulative_regret = 0.0;

    for _ in 0..horizon {
        let arm_id = agent.select_arm();
        let reward = model.perform_action(arm_id)?;
        agent.update(arm_id, reward)?;

        cumulative_regret += match model.dist_type() {
            DistType::Gaussian => {
                let mean = model.parameters().get(arm_id).copied().ok_or_else(|| {
                    BanditError::InvariantViolation(format!("no parameter for arm {arm_id}"))
                })?;
                optimal_value - mean
            }
            DistType::Bernoulli => 0.0,
        };

        result.rewards.push(reward);
        result.regret.push(cumulative_regret);
        result.optimal_choices.push(u8::from(arm_id == optimal_arm));
        result.estimates.push(agent.estimates().to_vec());
    }

    debug!(
        agent = agent.name(),
        horizon,
        total_reward = result.total_reward(),
        final_regret = result.final_regret(),
        "Finished simulation"
    );

    Ok(result)
}
