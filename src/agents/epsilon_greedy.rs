use super::agent::{ensure, Agent};
use super::arm::Arms;
use super::errors::AgentError;

use crate::rng::MaybeSeededRng;

use rand::Rng;

#[derive(Debug)]
pub struct EpsilonGreedy {
    arms: Arms,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(k: usize, epsilon: f64, seed: Option<u64>) -> Result<Self, AgentError> {
        let arms = Arms::new(k)?;
        ensure((0.0..=1.0).contains(&epsilon), || {
            format!("epsilon must be in [0, 1], got {epsilon}")
        })?;

        Ok(Self {
            arms,
            epsilon,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Agent for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn select_arm(&mut self) -> usize {
        let rng = self.rng.get_rng();
        if rng.random::<f64>() < self.epsilon {
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

/// Always exploits the current best estimate. Kept as a baseline: it happily
/// locks onto whichever arm looked good first.
#[derive(Debug)]
pub struct Greedy {
    arms: Arms,
}

impl Greedy {
    pub fn new(k: usize) -> Result<Self, AgentError> {
        Ok(Self {
            arms: Arms::new(k)?,
        })
    }
}

impl Agent for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select_arm(&mut self) -> usize {
        self.arms.best_arm()
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

    #[test]
    fn invalid_epsilon() {
        for epsilon in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                EpsilonGreedy::new(3, epsilon, SEED),
                Err(AgentError::Validation(_))
            ));
        }
    }

    #[test]
    fn draw_best() {
        let mut agent = EpsilonGreedy::new(3, 0.0, SEED).unwrap();
        assert_eq!(agent.select_arm(), 0);

        agent.update(2, 1.0).unwrap();
        assert!((0..100).all(|_| agent.select_arm() == 2));
    }

    #[test]
    fn explore() {
        let mut agent = EpsilonGreedy::new(4, 1.0, SEED).unwrap();
        agent.update(0, 10.0).unwrap();

        let mut seen = [false; 4];
        (0..200).for_each(|_| seen[agent.select_arm()] = true);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn explore_rate() {
        let mut agent = EpsilonGreedy::new(2, 0.2, SEED).unwrap();
        agent.update(0, 1.0).unwrap();

        // exploration picks arm 1 half of the time
        let n = 20_000;
        let picks = (0..n).filter(|_| agent.select_arm() == 1).count();
        let rate = picks as f64 / n as f64;
        assert!((rate - 0.1).abs() < 0.02);
    }

    #[test]
    fn reproducible() {
        let mut a = EpsilonGreedy::new(5, 0.5, SEED).unwrap();
        let mut b = EpsilonGreedy::new(5, 0.5, SEED).unwrap();

        let xs: Vec<usize> = (0..100).map(|_| a.select_arm()).collect();
        let ys: Vec<usize> = (0..100).map(|_| b.select_arm()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn greedy_cold_start() {
        let mut agent = Greedy::new(4).unwrap();
        assert_eq!(agent.select_arm(), 0);
    }

    #[test]
    fn greedy_gets_stuck() {
        let mut agent = Greedy::new(2).unwrap();

        // a lucky first pull on the worse arm is never revisited
        agent.update(0, 0.5).unwrap();
        for _ in 0..50 {
            let arm_id = agent.select_arm();
            assert_eq!(arm_id, 0);
            agent.update(arm_id, 0.1).unwrap();
        }
        assert_eq!(agent.counts(), &[51, 0]);
    }
}
