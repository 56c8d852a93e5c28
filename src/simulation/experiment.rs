use super::errors::SimulationError;
use super::simulate::simulate;

use crate::agents::AgentType;
use crate::bandit::{Bandit, RewardModel};
use crate::config::{BanditConfig, ExperimentConfig};
use crate::stats::MeanCurve;

use serde::Serialize;
use tracing::{debug, info};

// Spreads consecutive stream ids across the seed space.
const STREAM_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Regret and optimal-choice curves averaged over independent runs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub agent: String,
    pub runs: usize,
    pub horizon: usize,
    pub mean_regret: Vec<f64>,
    /// Per round fraction of runs that chose the true best arm.
    pub optimal_rate: Vec<f64>,
    pub mean_total_reward: f64,
}

impl ExperimentSummary {
    pub fn final_regret(&self) -> f64 {
        self.mean_regret.last().copied().unwrap_or_default()
    }

    pub fn final_optimal_rate(&self) -> f64 {
        self.optimal_rate.last().copied().unwrap_or_default()
    }
}

fn stream_seed(seed: Option<u64>, stream: u64) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(stream.wrapping_mul(STREAM_STEP)))
}

/// Runs `experiment.runs` independent simulations, each against a freshly
/// built bandit and agent.
pub fn run_experiment(
    bandit_config: &BanditConfig,
    experiment: &ExperimentConfig,
    agent_type: &AgentType,
) -> Result<ExperimentSummary, SimulationError> {
    let ExperimentConfig {
        horizon,
        runs,
        seed,
    } = *experiment;

    if horizon == 0 || runs == 0 {
        return Err(SimulationError::Validation(format!(
            "horizon and runs must be positive, got horizon={horizon} runs={runs}"
        )));
    }

    let mut regret = MeanCurve::new(horizon);
    let mut optimal = MeanCurve::new(horizon);
    let mut total_reward = 0.0;
    let mut agent_name = "";

    info!(?agent_type, runs, horizon, "Starting experiment");

    for run in 0..runs as u64 {
        let mut bandit = Bandit::from_config(bandit_config, stream_seed(seed, 2 * run))?;
        let mut agent = agent_type.build(bandit.arms(), stream_seed(seed, 2 * run + 1))?;
        agent_name = agent.name();

        let result = simulate(&mut bandit, agent.as_mut(), horizon)?;
        debug!(
            run,
            bandit = %bandit,
            final_regret = result.final_regret(),
            optimal_rate = result.optimal_rate(),
            "Finished run"
        );

        regret.push(result.regret.iter().copied());
        optimal.push(result.optimal_choices.iter().map(|&c| f64::from(c)));
        total_reward += result.total_reward();
    }

    let summary = ExperimentSummary {
        agent: agent_name.to_string(),
        runs,
        horizon,
        mean_regret: regret.mean(),
        optimal_rate: optimal.mean(),
        mean_total_reward: total_reward / runs as f64,
    };

    info!(
        agent = %summary.agent,
        final_regret = summary.final_regret(),
        final_optimal_rate = summary.final_optimal_rate(),
        mean_total_reward = summary.mean_total_reward,
        "Finished experiment"
    );

    Ok(summary)
}
