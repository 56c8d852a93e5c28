use bandit_sim::config::AppConfig;
use bandit_sim::errors::AppError;
use bandit_sim::simulation::{run_experiment, ExperimentSummary};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        arms = config.bandit.arms,
        dist_type = %config.bandit.dist_type,
        horizon = config.experiment.horizon,
        runs = config.experiment.runs,
        seed = ?config.experiment.seed,
        "Loaded config"
    );

    if config.agents.is_empty() {
        warn!("No agents configured, nothing to simulate");
    }

    let summaries = config
        .agents
        .iter()
        .map(|agent_type| run_experiment(&config.bandit, &config.experiment, agent_type))
        .collect::<Result<Vec<ExperimentSummary>, _>>()?;

    println!("{}", serde_json::to_string_pretty(&summaries)?);

    Ok(())
}
