use super::agent::{ensure, Agent};
use super::arm::Arms;
use super::errors::AgentError;

use tracing::{debug, warn};

/// Explore-then-commit: round-robin over the arms for `m * K - 1` rounds, then
/// stick to the arm with the best estimate for the rest of the run.
#[derive(Debug)]
pub struct ExploreThenCommit {
    arms: Arms,
    m: u64,
    horizon: u64,
    total_count: u64,
    best_arm: Option<usize>,
}

impl ExploreThenCommit {
    pub fn new(k: usize, m: u64, horizon: u64) -> Result<Self, AgentError> {
        let arms = Arms::new(k)?;
        ensure(m > 0, || "m must be at least 1".to_string())?;

        let exploration_rounds = m.saturating_mul(k as u64);
        if exploration_rounds > horizon {
            warn!(
                exploration_rounds,
                horizon, "Exploration phase is longer than the horizon, the agent will never commit"
            );
        }

        Ok(Self {
            arms,
            m,
            horizon,
            total_count: 0,
            best_arm: None,
        })
    }

    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// Arm the agent committed to, once exploration is over.
    pub fn best_arm(&self) -> Option<usize> {
        self.best_arm
    }

    fn exploration_rounds(&self) -> u64 {
        self.m.saturating_mul(self.arms.len() as u64)
    }
}

impl Agent for ExploreThenCommit {
    fn name(&self) -> &'static str {
        "explore_then_commit"
    }

    fn select_arm(&mut self) -> usize {
        self.total_count += 1;

        if self.total_count < self.exploration_rounds() {
            return ((self.total_count - 1) % self.arms.len() as u64) as usize;
        }

        // frozen from the estimates as they stand once exploration is over
        let total_count = self.total_count;
        let arms = &self.arms;
        *self.best_arm.get_or_insert_with(|| {
            let best_arm = arms.best_arm();
            debug!(
                arm_id = best_arm,
                round = total_count,
                estimates = ?arms.values(),
                "Committed to arm"
            );
            best_arm
        })
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

    fn run(agent: &mut ExploreThenCommit, means: &[f64], rounds: usize) -> Vec<usize> {
        (0..rounds)
            .map(|_| {
                let arm_id = agent.select_arm();
                agent.update(arm_id, means[arm_id]).unwrap();
                arm_id
            })
            .collect()
    }

    #[test]
    fn invalid_budget() {
        assert!(matches!(
            ExploreThenCommit::new(3, 0, 100),
            Err(AgentError::Validation(_))
        ));
    }

    #[test]
    fn explore_round_robin() {
        let mut agent = ExploreThenCommit::new(3, 2, 100).unwrap();
        let arms = run(&mut agent, &[0.0, 1.0, 0.5], 5);
        assert_eq!(arms, vec![0, 1, 2, 0, 1]);
        assert_eq!(agent.best_arm(), None);
    }

    #[test]
    fn commit_to_best() {
        let mut agent = ExploreThenCommit::new(3, 2, 100).unwrap();
        let arms = run(&mut agent, &[0.0, 0.2, 0.9], 20);

        assert_eq!(&arms[..5], &[0, 1, 2, 0, 1]);
        assert!(arms[5..].iter().all(|&arm_id| arm_id == 2));
        assert_eq!(agent.best_arm(), Some(2));
    }

    #[test]
    fn commit_uses_last_exploration_round() {
        let mut agent = ExploreThenCommit::new(3, 2, 100).unwrap();
        for (arm_id, reward) in [(0, 1.0), (1, 0.0), (2, 1.0), (0, 1.0)] {
            assert_eq!(agent.select_arm(), arm_id);
            agent.update(arm_id, reward).unwrap();
        }

        // the fifth pull lifts arm 1 above the others
        assert_eq!(agent.select_arm(), 1);
        agent.update(1, 5.0).unwrap();

        assert_eq!(agent.select_arm(), 1);
        agent.update(1, -100.0).unwrap();
        assert_eq!(agent.select_arm(), 1);
    }

    #[test]
    fn commit_tie_lowest_index() {
        let mut agent = ExploreThenCommit::new(3, 2, 100).unwrap();
        let arms = run(&mut agent, &[0.5, 0.5, 0.5], 10);
        assert!(arms[5..].iter().all(|&arm_id| arm_id == 0));
    }

    #[test]
    fn single_round_budget() {
        let mut agent = ExploreThenCommit::new(1, 1, 10).unwrap();
        assert_eq!(agent.select_arm(), 0);
        assert_eq!(agent.best_arm(), Some(0));
    }

    #[test]
    fn budget_longer_than_horizon() {
        let mut agent = ExploreThenCommit::new(4, 10, 8).unwrap();
        let arms = run(&mut agent, &[0.0; 4], 8);
        assert_eq!(arms, vec![0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(agent.horizon(), 8);
    }
}
