use super::errors::AgentError;

use crate::stats::argmax;

/// Pull counts and running mean estimates for every arm of an agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Arms {
    counts: Vec<u64>,
    values: Vec<f64>,
}

impl Arms {
    pub fn new(k: usize) -> Result<Self, AgentError> {
        if k == 0 {
            return Err(AgentError::Validation(
                "an agent needs at least one arm".to_string(),
            ));
        }

        Ok(Self {
            counts: vec![0; k],
            values: vec![0.0; k],
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn total_pulls(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn best_arm(&self) -> usize {
        argmax(self.values.iter().copied())
    }

    /// Lowest index arm that was never pulled.
    pub fn untried_arm(&self) -> Option<usize> {
        self.counts.iter().position(|&count| count == 0)
    }

    pub fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), AgentError> {
        let (count, value) = self
            .counts
            .get_mut(arm_id)
            .zip(self.values.get_mut(arm_id))
            .ok_or(AgentError::ArmNotFound(arm_id))?;

        *count += 1;
        *value += (reward - *value) / (*count as f64);

        Ok(())
    }
}
