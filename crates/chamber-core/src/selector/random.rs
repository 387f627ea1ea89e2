//! Seeded and entropy-backed generators for spotlight draws.
//!
//! Selectors take any `rand::Rng`; these are the two used in practice.

use rand::SeedableRng;

pub use rand::rngs::StdRng;

/// Generator seeded from the operating system, for live page views
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Reproducible generator
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
