use super::agent::{ensure, Agent};
use super::arm::Arms;
use super::errors::AgentError;

use crate::stats::argmax;

// Untried arms come first, in index order; then the arm with the best
// estimate plus confidence bonus.
fn upper_confidence_arm<F>(arms: &Arms, bonus: F) -> usize
where
    F: Fn(u64) -> f64,
{
    if let Some(arm_id) = arms.untried_arm() {
        return arm_id;
    }

    argmax(
        arms.values()
            .iter()
            .zip(arms.counts())
            .map(|(&value, &count)| value + bonus(count)),
    )
}

/// UCB1 with bonus `sqrt(2 ln(t) / n)`.
#[derive(Debug)]
pub struct Ucb1 {
    arms: Arms,
    total_count: u64,
}

impl Ucb1 {
    pub fn new(k: usize) -> Result<Self, AgentError> {
        Ok(Self {
            arms: Arms::new(k)?,
            total_count: 0,
        })
    }
}

impl Agent for Ucb1 {
    fn name(&self) -> &'static str {
        "ucb1"
    }

    fn select_arm(&mut self) -> usize {
        self.total_count += 1;
        let log_total = (self.total_count as f64).ln();

        upper_confidence_arm(&self.arms, |count| (2.0 * log_total / count as f64).sqrt())
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }

    fn arms_mut(&mut self) -> &mut Arms {
        &mut self.arms
    }
}

/// UCB with a fixed confidence level `delta`: bonus `sqrt(2 ln(1/delta) / n)`.
#[derive(Debug)]
pub struct Ucb {
    arms: Arms,
    delta: f64,
}

impl Ucb {
    pub fn new(k: usize, delta: f64) -> Result<Self, AgentError> {
        let arms = Arms::new(k)?;
        ensure(delta > 0.0 && delta <= 1.0, || {
            format!("delta must be in (0, 1], got {delta}")
        })?;

        Ok(Self { arms, delta })
    }
}

impl Agent for Ucb {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn select_arm(&mut self) -> usize {
        let log_inv_delta = (1.0 / self.delta).ln();

        upper_confidence_arm(&self.arms, |count| {
            (2.0 * log_inv_delta / count as f64).sqrt()
        })
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }

    fn arms_mut(&mut self) -> &mut Arms {
        &mut self.arms
    }
}

/// UCB for sigma sub-gaussian rewards: bonus `sqrt(4 sigma^2 ln(t) / n)`.
#[derive(Debug)]
pub struct SubGaussianUcb {
    arms: Arms,
    sigma: f64,
    total_count: u64,
}

impl SubGaussianUcb {
    pub fn new(k: usize, sigma: f64) -> Result<Self, AgentError> {
        let arms = Arms::new(k)?;
        ensure(sigma.is_finite() && sigma > 0.0, || {
            format!("sigma must be a positive number, got {sigma}")
        })?;

        Ok(Self {
            arms,
            sigma,
            total_count: 0,
        })
    }
}

impl Agent for SubGaussianUcb {
    fn name(&self) -> &'static str {
        "sub_gaussian_ucb"
    }

    fn select_arm(&mut self) -> usize {
        self.total_count += 1;
        let scale = 4.0 * self.sigma.powi(2) * (self.total_count as f64).ln();

        upper_confidence_arm(&self.arms, |count| (scale / count as f64).sqrt())
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }

    fn arms_mut(&mut self) -> &mut Arms {
        &mut self.arms
    }
}
