use crate::samplers::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Yields every dataset index exactly once, in shuffled order.
///
/// With a fixed seed the permutation is reproducible across runs; without one
/// each call to [`Sampler::iter`] draws a fresh shuffle from the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler {
    seed: Option<u64>,
}

impl RandomSampler {
    pub fn new() -> Self {
        RandomSampler { seed: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomSampler { seed: Some(seed) }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, len: usize) -> Box<dyn Iterator<Item = usize>> {
        let mut indices: Vec<usize> = (0..len).collect();
        match self.seed {
            Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => indices.shuffle(&mut rand::thread_rng()),
        }
        Box::new(indices.into_iter())
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_a_permutation() {
        let sampler = RandomSampler::new();
        let mut indices: Vec<usize> = sampler.iter(10).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..10).collect::<Vec<usize>>());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let sampler = RandomSampler::with_seed(42);
        let first: Vec<usize> = sampler.iter(20).collect();
        let second: Vec<usize> = sampler.iter(20).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let first: Vec<usize> = RandomSampler::with_seed(1).iter(50).collect();
        let second: Vec<usize> = RandomSampler::with_seed(2).iter(50).collect();
        assert_ne!(first, second);
    }
}
