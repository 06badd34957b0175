use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Supplies the integers used to seed random matrix values.
pub trait RandomSource {
    /// Returns a (pseudo-)random value between `min` and `max`, inclusive
    /// on both ends.
    fn generate_range(&mut self, min: i64, max: i64) -> i64;
}

/// Default source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn generate_range(&mut self, min: i64, max: i64) -> i64 {
        let die = Uniform::from(min..=max);
        die.sample(&mut rand::thread_rng())
    }
}

/// Deterministic source for reproducible fills.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn generate_range(&mut self, min: i64, max: i64) -> i64 {
        let die = Uniform::from(min..=max);
        die.sample(&mut self.rng)
    }
}
