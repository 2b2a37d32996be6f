//! Injected randomness.
//!
//! The engine never owns a random number generator. Operations that need
//! a random pick take a `&mut impl RandomSource`, so callers decide where
//! entropy comes from and tests can script exact results.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. `bound` is always non-zero when
    /// called by the engine.
    fn next(&mut self, bound: usize) -> usize;
}

/// Adapter that turns any `rand::Rng` into a [`RandomSource`].
///
/// # Examples
///
/// ```rust
/// use tactica::{RandomSource, RngSource};
///
/// let mut source = RngSource::new(rand::thread_rng());
/// assert!(source.next(6) < 6);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Take the wrapped generator back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_source_in_bounds() {
        let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(7));
        for bound in 1..50 {
            assert!(source.next(bound) < bound);
        }
    }

    #[test]
    fn test_rng_source_deterministic() {
        let mut a = RngSource::new(ChaCha8Rng::seed_from_u64(42));
        let mut b = RngSource::new(ChaCha8Rng::seed_from_u64(42));
        let left: Vec<usize> = (0..16).map(|_| a.next(100)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.next(100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_bound_of_one() {
        let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
        assert_eq!(source.next(1), 0);
    }
}
