//! Mutation of continuous traits.
//!
//! Each generation, every individual's trait is shifted by an independent draw
//! from `Normal(0, mutation_sd)`. With `mutation_sd = 0` the operator is the
//! identity.

use crate::errors::{EngineError, Result};
use crate::evolution::{stream_seeds, STREAM_CHUNK};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Gaussian trait mutation with a fixed standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct TraitMutator {
    sd: f64,
    noise: Normal<f64>,
}

impl TraitMutator {
    /// Create a mutator drawing noise with standard deviation `mutation_sd`.
    ///
    /// # Errors
    /// [`EngineError::Domain`] if `mutation_sd` is negative or not finite.
    pub fn new(mutation_sd: f64) -> Result<Self> {
        if !mutation_sd.is_finite() || mutation_sd < 0.0 {
            return Err(EngineError::domain(format!(
                "mutation_sd must be finite and >= 0, got {mutation_sd}"
            )));
        }
        let noise = Normal::new(0.0, mutation_sd)
            .map_err(|e| EngineError::domain(format!("mutation_sd = {mutation_sd}: {e}")))?;
        Ok(Self {
            sd: mutation_sd,
            noise,
        })
    }

    #[inline]
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Whether the operator leaves traits untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.sd == 0.0
    }

    /// Mutate a single trait value.
    #[inline]
    pub fn mutate_trait<R: Rng + ?Sized>(&self, trait_value: f64, rng: &mut R) -> f64 {
        trait_value + self.noise.sample(rng)
    }

    /// Mutate every trait in place.
    pub fn apply_in_place<R: Rng + ?Sized>(&self, traits: &mut [f64], rng: &mut R) {
        if self.is_identity() {
            return;
        }
        for z in traits.iter_mut() {
            *z += self.noise.sample(rng);
        }
    }

    /// Return a mutated copy of `traits`.
    pub fn apply<R: Rng + ?Sized>(&self, traits: &[f64], rng: &mut R) -> Vec<f64> {
        let mut mutated = traits.to_vec();
        self.apply_in_place(&mut mutated, rng);
        mutated
    }

    /// Parallel [`apply`](Self::apply).
    ///
    /// Draws one seed per chunk from `rng`, then mutates each chunk with its own
    /// stream. Deterministic for a given `rng` state, but produces different
    /// values than the serial version.
    pub fn apply_par<R: Rng + ?Sized>(&self, traits: &[f64], rng: &mut R) -> Vec<f64> {
        let mut mutated = traits.to_vec();
        if self.is_identity() {
            return mutated;
        }
        let seeds = stream_seeds(mutated.len(), rng);
        mutated
            .par_chunks_mut(STREAM_CHUNK)
            .zip(seeds.par_iter())
            .for_each(|(chunk, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                self.apply_in_place(chunk, &mut local_rng);
            });
        mutated
    }
}

/// Add independent `Normal(0, mutation_sd)` noise to every trait.
pub fn apply_mutation<R: Rng + ?Sized>(
    traits: &[f64],
    mutation_sd: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    Ok(TraitMutator::new(mutation_sd)?.apply(traits, rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn test_invalid_sd() {
        assert!(TraitMutator::new(-0.1).is_err());
        assert!(TraitMutator::new(f64::NAN).is_err());
        assert!(matches!(
            apply_mutation(&[1.0], f64::INFINITY, &mut rng(0)),
            Err(EngineError::Domain(_))
        ));
    }

    #[test]
    fn test_zero_sd_is_identity() {
        let traits = vec![0.0, -1.5, 3.25, 1e9];
        assert_eq!(apply_mutation(&traits, 0.0, &mut rng(1)).unwrap(), traits);
        let m = TraitMutator::new(0.0).unwrap();
        assert_eq!(m.apply_par(&traits, &mut rng(1)), traits);
    }

    #[test]
    fn test_preserves_length_and_changes_values() {
        let traits = vec![0.0; 50];
        let mutated = apply_mutation(&traits, 0.5, &mut rng(2)).unwrap();
        assert_eq!(mutated.len(), traits.len());
        assert!(mutated.iter().any(|&z| z != 0.0));
    }

    #[test]
    fn test_noise_moments() {
        let n = 200_000;
        let sd = 2.0;
        let mutated = apply_mutation(&vec![10.0; n], sd, &mut rng(3)).unwrap();
        let mean = mutated.iter().sum::<f64>() / n as f64;
        let var = mutated.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        // standard error of the mean is sd / sqrt(n) ≈ 0.0045
        assert!((mean - 10.0).abs() < 0.03, "mean = {mean}");
        assert!((var.sqrt() - sd).abs() < 0.03, "sd = {}", var.sqrt());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let traits: Vec<f64> = (0..3000).map(|i| i as f64 * 0.01).collect();
        let m = TraitMutator::new(0.1).unwrap();
        assert_eq!(m.apply(&traits, &mut rng(9)), m.apply(&traits, &mut rng(9)));
        assert_eq!(
            m.apply_par(&traits, &mut rng(9)),
            m.apply_par(&traits, &mut rng(9))
        );
        assert_ne!(m.apply(&traits, &mut rng(9)), m.apply(&traits, &mut rng(10)));
    }
}
