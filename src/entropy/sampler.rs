use rand::{Rng, RngCore};

/// Uniform integer source consumed by the generator.
pub trait Sampler {
    /// Return a value drawn uniformly from `[0, bound)`. `bound` must be non-zero.
    fn sample_index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> Sampler for R {
    #[inline]
    fn sample_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rng_samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in [1, 2, 10, 90] {
            for _ in 0..500 {
                assert!(rng.sample_index(bound) < bound);
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..100).all(|_| rng.sample_index(1) == 0));
    }

    #[test]
    fn seeded_rngs_repeat() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<usize> = (0..32).map(|_| a.sample_index(62)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.sample_index(62)).collect();
        assert_eq!(xs, ys);
    }
}
