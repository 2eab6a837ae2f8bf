use crate::kernel::strategies::{vector, MIN_ROWS_PER_TASK};
use crate::kernel::{CompetitionKernel, KernelWidth};
use rayon::prelude::*;

/// Strategy: [`Parallel`](super::Parallel) row scheduling with the
/// [`Vector`](super::Vector) lane-blocked row reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelVector;

impl CompetitionKernel for ParallelVector {
    fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        let mut n_eff = vec![0.0; reference.len()];
        n_eff
            .par_iter_mut()
            .zip(reference.par_iter())
            .with_min_len(MIN_ROWS_PER_TASK)
            .for_each(|(slot, &z_i)| *slot = vector::row_sum(z_i, population, width));
        n_eff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::strategies::Naive;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_parallel_vector_large_input() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        // Several tasks' worth of rows plus a ragged lane tail.
        let traits: Vec<f64> = (0..(MIN_ROWS_PER_TASK * 9 + 3))
            .map(|_| rng.random_range(-5.0..5.0))
            .collect();
        let width = KernelWidth::new(0.8).unwrap();

        let expected = Naive.n_eff(&traits, &width);
        let got = ParallelVector.n_eff(&traits, &width);
        for (a, b) in expected.iter().zip(&got) {
            assert!((a - b).abs() <= 1e-10 * a.abs());
        }
    }
}
