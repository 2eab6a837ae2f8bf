use crate::kernel::{CompetitionKernel, KernelWidth};

/// Strategy: one reduction per output row.
///
/// Each row is an independent `fold` over the whole population with no
/// symmetry shortcut. [`Parallel`](super::Parallel) distributes exactly this
/// row function across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fold;

/// Interaction sum of one trait against the whole population.
#[inline]
pub(crate) fn row_sum(z_i: f64, population: &[f64], width: &KernelWidth) -> f64 {
    population
        .iter()
        .fold(0.0, |sum, &z_j| sum + width.weight(z_i, z_j))
}

impl CompetitionKernel for Fold {
    fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        reference
            .iter()
            .map(|&z_i| row_sum(z_i, population, width))
            .collect()
    }
}
