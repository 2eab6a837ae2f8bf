use crate::kernel::KernelWidth;

/// Core trait for competition-kernel strategies.
///
/// Every strategy computes the same quantity, the Gaussian-weighted interaction
/// sum each reference individual receives from a population:
///
/// ```text
/// n_eff[i] = Σ_j exp(-(reference[i] - population[j])² / (2·sigma²))
/// ```
///
/// Strategies differ only in how the work is scheduled. Implementations must
/// agree with each other within [`STRATEGY_TOLERANCE`](crate::kernel::STRATEGY_TOLERANCE).
pub trait CompetitionKernel {
    /// Interaction sums of each `reference` trait against every `population` trait.
    fn n_eff_against(&self, reference: &[f64], population: &[f64], width: &KernelWidth)
        -> Vec<f64>;

    /// Interaction sums of a community against itself, self-pairs included.
    fn n_eff(&self, traits: &[f64], width: &KernelWidth) -> Vec<f64> {
        self.n_eff_against(traits, traits, width)
    }
}
