//! Offspring-number sampling.
//!
//! An individual with fitness `f` leaves `Poisson(f)` offspring. Fitness is
//! produced by a model outside this crate from the competition kernel's
//! `n_eff`; this module only turns it into integer counts.

use crate::errors::{EngineError, Result};
use crate::evolution::{stream_seeds, STREAM_CHUNK};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Poisson offspring sampler.
///
/// Stateless; exists so drivers can hold "the sampler" next to the mutator and
/// kernel config.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffspringSampler;

/// Poisson law for one individual, or `None` for the degenerate rate 0.
fn offspring_law(index: usize, fitness: f64) -> Result<Option<Poisson<f64>>> {
    if !fitness.is_finite() || fitness < 0.0 {
        return Err(EngineError::domain(format!(
            "fitness must be finite and >= 0, got {fitness} at index {index}"
        )));
    }
    if fitness == 0.0 {
        return Ok(None);
    }
    Poisson::new(fitness)
        .map(Some)
        .map_err(|e| EngineError::domain(format!("fitness {fitness} at index {index}: {e}")))
}

#[inline]
fn draw<R: Rng + ?Sized>(law: &Option<Poisson<f64>>, rng: &mut R) -> u64 {
    match law {
        Some(poisson) => poisson.sample(rng) as u64,
        None => 0,
    }
}

impl OffspringSampler {
    /// Validate the whole fitness vector before drawing anything.
    fn laws(fitness: &[f64]) -> Result<Vec<Option<Poisson<f64>>>> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| offspring_law(i, f))
            .collect()
    }

    /// One offspring count per individual.
    ///
    /// # Errors
    /// [`EngineError::Domain`] if any fitness is negative or not finite. No
    /// counts are returned in that case.
    pub fn draw<R: Rng + ?Sized>(&self, fitness: &[f64], rng: &mut R) -> Result<Vec<u64>> {
        let laws = Self::laws(fitness)?;
        Ok(laws.iter().map(|law| draw(law, rng)).collect())
    }

    /// Parallel [`draw`](Self::draw) with one derived stream per chunk.
    pub fn draw_par<R: Rng + ?Sized>(&self, fitness: &[f64], rng: &mut R) -> Result<Vec<u64>> {
        let laws = Self::laws(fitness)?;
        let seeds = stream_seeds(laws.len(), rng);
        let mut counts = vec![0u64; laws.len()];
        counts
            .par_chunks_mut(STREAM_CHUNK)
            .zip(laws.par_chunks(STREAM_CHUNK))
            .zip(seeds.par_iter())
            .for_each(|((out, chunk_laws), &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                for (slot, law) in out.iter_mut().zip(chunk_laws) {
                    *slot = draw(law, &mut local_rng);
                }
            });
        Ok(counts)
    }
}

/// Draw `Poisson(fitness[i])` offspring for every individual.
pub fn draw_offspring_counts<R: Rng + ?Sized>(fitness: &[f64], rng: &mut R) -> Result<Vec<u64>> {
    OffspringSampler.draw(fitness, rng)
}

/// Build the next community: parent `i`'s trait repeated `counts[i]` times,
/// in parent order.
///
/// # Errors
/// [`EngineError::LengthMismatch`] if `counts` is not aligned with `parents`.
/// [`EngineError::Domain`] if the summed counts overflow `usize`.
pub fn assemble_offspring(parents: &[f64], counts: &[u64]) -> Result<Vec<f64>> {
    if parents.len() != counts.len() {
        return Err(EngineError::LengthMismatch {
            expected: parents.len(),
            actual: counts.len(),
        });
    }
    let total = counts
        .iter()
        .try_fold(0u64, |acc, &k| acc.checked_add(k))
        .and_then(|total| usize::try_from(total).ok())
        .ok_or_else(|| EngineError::domain("total offspring count overflows usize"))?;
    let mut next = Vec::with_capacity(total);
    for (&z, &k) in parents.iter().zip(counts) {
        // k <= total, which already fits in usize
        next.extend(std::iter::repeat_n(z, k as usize));
    }
    Ok(next)
}
