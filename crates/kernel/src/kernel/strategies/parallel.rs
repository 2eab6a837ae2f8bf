use crate::kernel::strategies::{fold, MIN_ROWS_PER_TASK};
use crate::kernel::{CompetitionKernel, KernelWidth};
use rayon::prelude::*;

/// Strategy: rows distributed across the rayon worker pool.
///
/// # How it works
///
/// Each output slot is owned by exactly one worker, which computes it with the
/// same row reduction as [`Fold`](super::Fold). Workers only read the shared
/// trait slices, so no locking is needed and the result does not depend on how
/// rows are scheduled.
///
/// The pool is rayon's global pool, sized to the available hardware threads
/// unless the application configures it otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel;

impl CompetitionKernel for Parallel {
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
            .for_each(|(slot, &z_i)| *slot = fold::row_sum(z_i, population, width));
        n_eff
    }
}
