use super::agent::{ensure, Agent};
use super::arm::Arms;
use super::errors::AgentError;

use crate::rng::MaybeSeededRng;

use rand::Rng;

/// Epsilon-greedy with the exploration rate `min(1, C*K / (d^2 * t))` at step `t`.
///
/// Starts out fully exploring and turns greedy as `t` grows. A larger `c` or a
/// smaller assumed gap `d` keeps it exploring for longer.
#[derive(Debug)]
pub struct DecayingEpsilonGreedy {
    arms: Arms,
    c: f64,
    d: f64,
    t: u64,
    rng: MaybeSeededRng,
}

impl DecayingEpsilonGreedy {
    pub fn new(k: usize, c: f64, d: f64, seed: Option<u64>) -> Result<Self, AgentError> {
        let arms = Arms::new(k)?;
        ensure(c.is_finite() && c >= 0.0, || {
            format!("c must be a non-negative number, got {c}")
        })?;
        ensure(d.is_finite() && d > 0.0, || {
            format!("d must be a positive number, got {d}")
        })?;

        Ok(Self {
            arms,
            c,
            d,
            t: 0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn epsilon(&self) -> f64 {
        if self.t == 0 {
            return 1.0;
        }
        let k = self.arms.len() as f64;
        (self.c * k / (self.d.powi(2) * self.t as f64)).min(1.0)
    }
}

impl Agent for DecayingEpsilonGreedy {
    fn name(&self) -> &'static str {
        "decaying_epsilon_greedy"
    }

    fn select_arm(&mut self) -> usize {
        self.t += 1;
        let epsilon = self.epsilon();

        let rng = self.rng.get_rng();
        if rng.random::<f64>() < epsilon {
            rng.random_range(0..self.arms.len())
        } else {
            self.arms.best_arm()
        }
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }

    fn arms_mut(&mut self) -> &mut Arms {
        &mut self.arms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);
    const EPS: f64 = 1e-12;

    #[test]
    fn invalid_parameters() {
        for (c, d) in [(-1.0, 0.5), (1.0, 0.0), (1.0, -0.5), (f64::INFINITY, 0.5)] {
            assert!(matches!(
                DecayingEpsilonGreedy::new(3, c, d, SEED),
                Err(AgentError::Validation(_))
            ));
        }
    }

    #[test]
    fn schedule() {
        let mut agent = DecayingEpsilonGreedy::new(2, 1.0, 0.5, SEED).unwrap();
        assert_eq!(agent.epsilon(), 1.0);

        // C*K / d^2 = 8, so the rate stays at 1 for the first 8 steps
        for _ in 0..8 {
            agent.select_arm();
            assert_eq!(agent.epsilon(), 1.0);
        }
        agent.select_arm();
        assert!((agent.epsilon() - 8.0 / 9.0).abs() < EPS);

        (0..991).for_each(|_| {
            agent.select_arm();
        });
        assert_eq!(agent.t, 1000);
        assert!((agent.epsilon() - 0.008).abs() < EPS);
    }

    #[test]
    fn wider_gap_explores_less() {
        let mut narrow = DecayingEpsilonGreedy::new(3, 1.0, 0.1, SEED).unwrap();
        let mut wide = DecayingEpsilonGreedy::new(3, 1.0, 1.0, SEED).unwrap();
        (0..50).for_each(|_| {
            narrow.select_arm();
            wide.select_arm();
        });
        assert!(wide.epsilon() < narrow.epsilon());
    }

    #[test]
    fn zero_scale_is_greedy() {
        let mut agent = DecayingEpsilonGreedy::new(3, 0.0, 1.0, SEED).unwrap();
        agent.update(1, 1.0).unwrap();
        assert!((0..100).all(|_| agent.select_arm() == 1));
    }

    #[test]
    fn converges_to_best() {
        let mut agent = DecayingEpsilonGreedy::new(3, 1.0, 1.0, SEED).unwrap();
        agent.update(2, 1.0).unwrap();
        (0..10_000).for_each(|_| {
            agent.select_arm();
        });

        let picks = (0..1000).filter(|_| agent.select_arm() == 2).count();
        assert!(picks > 990);
    }
}
