use rand::rngs::{OsRng, StdRng};
use rand::{SeedableRng, TryRngCore};

use super::Sampler;

/// Which generator the front-ends hand to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    /// Thread-local generator, reseeded from the OS.
    #[default]
    Thread,
    /// Operating system generator, queried on every draw.
    Os,
    /// Reproducible generator for scripted runs.
    Seeded(u64),
}

impl EntropySource {
    pub fn sampler(self) -> Box<dyn Sampler> {
        match self {
            Self::Thread => Box::new(rand::rng()),
            Self::Os => Box::new(OsRng.unwrap_err()),
            Self::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Thread => "thread rng",
            Self::Os => "os rng",
            Self::Seeded(_) => "seeded rng",
        }
    }
}
