//! Injectable source of randomness shared by fleet generation and the
//! computer player.

use rand::Rng;

/// Uniform integer generator.
pub trait RandomSource {
    /// Uniform draw from `low..=high_inclusive`. Callers guarantee
    /// `low <= high_inclusive`.
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        self.random_range(low..=high_inclusive)
    }
}
