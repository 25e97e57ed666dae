use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform values in `[0, 1)`.
///
/// Effects only ever ask for unit draws so a test can script the exact
/// sequence an effect consumes.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, n)`; returns 0 when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let v = (self.next_unit() * n as f64).floor() as u32;
        v.min(n - 1)
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
