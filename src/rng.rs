use rand::{rngs::SmallRng, SeedableRng};

/// Single random stream shared, in a fixed order, by every component of a run.
///
/// Unseeded streams draw their seed from the OS and keep it, so every run
/// can be replayed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: SmallRng,
}

impl SeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);

        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SEED: u64 = 1234;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new(Some(SEED));
        let mut b = SeededRng::new(Some(SEED));

        let xs: Vec<u64> = (0..16).map(|_| a.get_rng().random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn unseeded_records_seed() {
        let mut rng = SeededRng::new(None);
        let mut replay = SeededRng::new(Some(rng.seed()));

        assert_eq!(
            rng.get_rng().random::<u64>(),
            replay.get_rng().random::<u64>()
        );
    }
}
