use crate::kernel::{CompetitionKernel, KernelWidth};

/// Strategy: direct double loop.
///
/// The reference implementation the other strategies are checked against.
/// O(n·m), single-threaded, no tricks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl CompetitionKernel for Naive {
    fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        let mut n_eff = vec![0.0; reference.len()];
        for (slot, &z_i) in n_eff.iter_mut().zip(reference) {
            for &z_j in population {
                *slot += width.weight(z_i, z_j);
            }
        }
        n_eff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_identical_traits() {
        let width = KernelWidth::new(1.0).unwrap();
        assert_eq!(Naive.n_eff(&[0.0, 0.0, 0.0], &width), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_naive_two_individuals() {
        let width = KernelWidth::new(1.0).unwrap();
        let n_eff = Naive.n_eff(&[0.0, 1.0], &width);
        let w = (-0.5f64).exp();
        assert!((n_eff[0] - (1.0 + w)).abs() < 1e-12);
        assert!((n_eff[1] - (1.0 + w)).abs() < 1e-12);
    }
}
