// src/generators/rng.rs
use rand::{rngs::OsRng, Rng};

/// Source of uniformly distributed randomness used by the generator.
///
/// Implementations must be safe to share between concurrent requests.
pub trait SecureRandom: Send + Sync {
    /// Uniform integer in `[0, n)`. Callers guarantee `n > 0`.
    fn uniform_int(&self, n: usize) -> usize;

    /// Uniformly chosen element, or `None` for an empty slice.
    fn choose_one<T: Copy>(&self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        Some(items[self.uniform_int(items.len())])
    }
}

/// Operating system CSPRNG. Stateless, so every call reads fresh entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn uniform_int(&self, n: usize) -> usize {
        let mut rng = OsRng;
        // gen_range uses rejection sampling, so there is no modulo bias
        rng.gen_range(0..n)
    }
}

#[cfg(test)]
pub(crate) use seeded::SeededRandom;
