//! Injectable uniform random source used by [`Matrix::random`](crate::Matrix::random).

use rand::Rng;

/// Anything that can produce a float in `[min, max)`.
pub trait UniformSource {
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// `min + u * (max - min)` with `u` drawn from `[0, 1)`.
///
/// Unlike `gen_range`, an inverted range does not panic; it simply maps
/// into `(max, min]`.
impl<R: Rng> UniformSource for R {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        let u: f64 = self.gen();
        min + u * (max - min)
    }
}
