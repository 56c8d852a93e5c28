use rand::{rngs::SmallRng, SeedableRng};
use std::fmt;

/// Random source owned by a single bandit or agent.
///
/// Seeding is always decided by the caller: a seeded source replays the same
/// stream, an unseeded one draws its state from the OS.
#[derive(Clone)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

impl fmt::Debug for MaybeSeededRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MaybeSeededRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SEED: u64 = 1234;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MaybeSeededRng::new(Some(SEED));
        let mut b = MaybeSeededRng::new(Some(SEED));

        let xs: Vec<f64> = (0..16).map(|_| a.get_rng().random()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn keeps_seed() {
        assert_eq!(MaybeSeededRng::new(Some(SEED)).seed(), Some(SEED));
        assert_eq!(MaybeSeededRng::new(None).seed(), None);
    }
}
