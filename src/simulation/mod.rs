pub mod errors;
mod experiment;
mod simulate;

pub use experiment::{run_experiment, ExperimentSummary};
pub use simulate::{simulate, SimulationResult};
