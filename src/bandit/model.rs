use super::distribution::DistType;
use super::errors::BanditError;

use crate::config::BanditConfig;
use crate::rng::MaybeSeededRng;
use crate::stats::argmax;

use rand::{distr::Bernoulli, Rng};
use rand_distr::{Distribution, Normal, StandardNormal};
use std::fmt;
use tracing::debug;

/// Source of stochastic rewards with known true arm parameters.
pub trait RewardModel {
    fn arms(&self) -> usize;
    fn dist_type(&self) -> DistType;
    /// True per-arm parameters: means for gaussian arms, probabilities for bernoulli arms.
    fn parameters(&self) -> &[f64];
    fn perform_action(&mut self, arm: usize) -> Result<f64, BanditError>;

    fn optimal_arm(&self) -> usize {
        argmax(self.parameters().iter().copied())
    }

    fn optimal_value(&self) -> f64 {
        self.parameters()
            .get(self.optimal_arm())
            .copied()
            .unwrap_or(f64::NAN)
    }
}

/// How the true arm parameters are chosen when a bandit is built.
#[derive(Clone, Debug, PartialEq)]
pub enum Initialization {
    /// Caller supplied means or probabilities, one per arm.
    Explicit(Vec<f64>),
    /// Standard normal means, or uniform probabilities.
    Random,
    /// Random best value, every following arm `delta` worse than the previous one.
    RewardGap { delta: f64 },
}

#[derive(Debug)]
pub struct Bandit {
    k: usize,
    dist_type: DistType,
    parameters: Vec<f64>,
    rng: MaybeSeededRng,
}

impl Bandit {
    pub fn new(
        k: usize,
        dist_type: DistType,
        initialization: Initialization,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if k == 0 {
            return Err(BanditError::Validation(
                "a bandit needs at least one arm".to_string(),
            ));
        }

        let mut rng = MaybeSeededRng::new(seed);
        let parameters = match initialization {
            Initialization::Explicit(values) => {
                validate_parameters(k, dist_type, &values)?;
                values
            }
            Initialization::Random => random_parameters(k, dist_type, rng.get_rng()),
            Initialization::RewardGap { delta } => {
                if !(delta.is_finite() && delta > 0.0) {
                    return Err(BanditError::Validation(format!(
                        "reward gap mode requires a positive delta, got {delta}"
                    )));
                }
                reward_gap_parameters(k, dist_type, delta, rng.get_rng())
            }
        };

        debug!(
            arms = k,
            dist_type = %dist_type,
            seed = ?seed,
            parameters = ?parameters,
            "Created bandit"
        );

        Ok(Self {
            k,
            dist_type,
            parameters,
            rng,
        })
    }

    pub fn from_config(config: &BanditConfig, seed: Option<u64>) -> Result<Self, BanditError> {
        let initialization = match (&config.means, config.delta) {
            (Some(_), Some(_)) => {
                return Err(BanditError::Validation(
                    "means and delta are mutually exclusive".to_string(),
                ))
            }
            (Some(means), None) => Initialization::Explicit(means.clone()),
            (None, Some(delta)) => Initialization::RewardGap { delta },
            (None, None) => Initialization::Random,
        };

        Self::new(config.arms, config.dist_type, initialization, seed)
    }
}

impl RewardModel for Bandit {
    fn arms(&self) -> usize {
        self.k
    }

    fn dist_type(&self) -> DistType {
        self.dist_type
    }

    fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    fn perform_action(&mut self, arm: usize) -> Result<f64, BanditError> {
        if arm >= self.k {
            return Err(BanditError::OutOfRange { arm, arms: self.k });
        }
        if self.parameters.len() != self.k {
            return Err(BanditError::InvariantViolation(format!(
                "{} parameters stored for {} arms",
                self.parameters.len(),
                self.k
            )));
        }

        let parameter = self.parameters[arm];
        let rng = self.rng.get_rng();

        match self.dist_type {
            DistType::Gaussian => Normal::new(parameter, 1.0)
                .map(|normal| normal.sample(rng))
                .map_err(|e| BanditError::Sampling(e.to_string())),
            DistType::Bernoulli => Bernoulli::new(parameter)
                .map(|bernoulli| if bernoulli.sample(rng) { 1.0 } else { 0.0 })
                .map_err(|e| BanditError::Sampling(e.to_string())),
        }
    }
}

impl fmt::Display for Bandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|value| format!("{value:.2}"))
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Bandit(dist_type={}, K={}, {}=[{}])",
            self.dist_type,
            self.k,
            self.dist_type.parameter_name(),
            parameters
        )
    }
}

fn validate_parameters(k: usize, dist_type: DistType, values: &[f64]) -> Result<(), BanditError> {
    if values.len() != k {
        return Err(BanditError::Validation(format!(
            "for K={k} arms, {} values provided",
            values.len()
        )));
    }

    let invalid = match dist_type {
        DistType::Gaussian => values.iter().find(|m| !m.is_finite()),
        DistType::Bernoulli => values.iter().find(|p| !(0.0..=1.0).contains(*p)),
    };

    match invalid {
        Some(value) => Err(BanditError::Validation(format!(
            "{value} is not a valid {} value for a {dist_type} bandit",
            dist_type.parameter_name()
        ))),
        None => Ok(()),
    }
}

fn random_parameters<R: Rng + ?Sized>(k: usize, dist_type: DistType, rng: &mut R) -> Vec<f64> {
    match dist_type {
        DistType::Gaussian => (0..k)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect(),
        DistType::Bernoulli => (0..k).map(|_| rng.random::<f64>()).collect(),
    }
}

fn reward_gap_parameters<R: Rng + ?Sized>(
    k: usize,
    dist_type: DistType,
    delta: f64,
    rng: &mut R,
) -> Vec<f64> {
    let best = random_parameters(k, dist_type, rng)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);

    let ladder = (0..k).map(|i| best - (i as f64) * delta);
    match dist_type {
        DistType::Gaussian => ladder.collect(),
        // clamp so every arm stays a valid probability
        DistType::Bernoulli => ladder.map(|p| p.max(0.0)).collect(),
    }
}
