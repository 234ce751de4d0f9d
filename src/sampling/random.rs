//! Random number source consumed by the samplers.

/// A sequential source of uniform values in `[0, 1)`.
///
/// Every [`rand::Rng`] implements this, so seeded generators such as
/// `rand_pcg::Pcg64` can be passed straight to
/// [`DiscSampler::generate`](super::DiscSampler::generate).
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
