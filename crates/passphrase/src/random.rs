use rand::{Rng, RngCore};

/// Source of uniformly distributed integers.
///
/// Drawing a value mutates the state of the source so every
/// method takes `&mut self`; sharing a source between threads
/// requires wrapping its owner in a mutex.
///
/// Any [RngCore] is a source, production code uses
/// [rand::rngs::OsRng] and tests use a seeded
/// [rand::rngs::StdRng].
pub trait RandomSource {
    /// Uniformly distributed integer in the inclusive
    /// range `[min, max]`.
    ///
    /// Callers must ensure that `min <= max`.
    fn random_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..=max)
    }
}
