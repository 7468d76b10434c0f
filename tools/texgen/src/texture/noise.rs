//! Randomness for the white noise pattern
//!
//! White noise is the only non-deterministic source in the pipeline, so it
//! draws through the [`NoiseSource`] trait instead of reaching for a global
//! generator. Tests and reproducible renders inject their own source.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplier of uniform samples in `[0, 1)`
pub trait NoiseSource {
    fn sample(&mut self) -> f32;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self) -> f32 {
        (**self).sample()
    }
}

/// [`NoiseSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomNoise<R> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<ThreadRng> {
    /// Unseeded; every render differs
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomNoise<Pcg32> {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }

    /// Fresh generator seeded from the thread-local one
    pub fn from_entropy() -> Self {
        Self::new(Pcg32::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    #[inline]
    fn sample(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Always returns the same value; for tests and previews that must not flicker
#[derive(Debug, Clone, Copy)]
pub struct ConstantNoise(pub f32);

impl NoiseSource for ConstantNoise {
    fn sample(&mut self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_in_unit_interval() {
        let mut noise = RandomNoise::thread();
        for _ in 0..1000 {
            let u = noise.sample();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomNoise::seeded(7);
        let mut b = RandomNoise::seeded(7);
        for _ in 0..64 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomNoise::seeded(1);
        let mut b = RandomNoise::seeded(2);
        let same = (0..32).filter(|_| a.sample() == b.sample()).count();
        assert!(same < 32);
    }

    #[test]
    fn test_constant_noise() {
        let mut noise = ConstantNoise(0.25);
        assert_eq!(noise.sample(), 0.25);
        assert_eq!(noise.sample(), 0.25);
    }

    #[test]
    fn test_mutable_reference_is_a_source() {
        fn draw(mut n: impl NoiseSource) -> f32 {
            n.sample()
        }
        let mut noise = ConstantNoise(0.5);
        assert_eq!(draw(&mut noise), 0.5);
    }
}
