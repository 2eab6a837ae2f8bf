use crate::kernel::strategies::Naive;
use crate::kernel::{CompetitionKernel, KernelWidth};

/// Strategy: upper-triangle sweep exploiting `w(i,j) = w(j,i)`.
///
/// Each unordered pair is evaluated once and credited to both endpoints, so the
/// self-interaction case does roughly half the `exp` calls of [`Naive`]. The
/// asymmetric case has no such structure and falls back to [`Naive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangular;

impl CompetitionKernel for Triangular {
    fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        Naive.n_eff_against(reference, population, width)
    }

    #[allow(clippy::needless_range_loop)]
    fn n_eff(&self, traits: &[f64], width: &KernelWidth) -> Vec<f64> {
        let n = traits.len();
        let mut n_eff = vec![0.0; n];
        for i in 0..n {
            let z_i = traits[i];
            // self-weight
            n_eff[i] += 1.0;
            for j in (i + 1)..n {
                let w = width.weight(z_i, traits[j]);
                n_eff[i] += w;
                n_eff[j] += w;
            }
        }
        n_eff
    }
}
