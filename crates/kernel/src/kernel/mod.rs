//! Competition kernel ("effective population size").
//!
//! Every individual competes with every other individual, weighted by a
//! Gaussian of their trait distance:
//!
//! ```text
//! w(i, j)  = exp(-(z_i - z_j)² / (2·sigma²))
//! n_eff[i] = Σ_j w(i, j)          (j = i included, w(i, i) = 1)
//! ```
//!
//! The computation is O(n²) and dominates a generation's runtime, so several
//! interchangeable [`KernelStrategy`] implementations are provided. They only
//! differ in scheduling and must agree within [`STRATEGY_TOLERANCE`].

mod config;
pub mod strategies;
mod traits;
mod width;

pub use config::{CompetitionKernelConfig, KernelStrategyRegistry};
pub use traits::CompetitionKernel;
pub use width::KernelWidth;

use crate::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use strategies::{Fold, Naive, Parallel, ParallelVector, Triangular, Vector};
use tracing::debug;

/// Relative tolerance within which all strategies agree on identical input.
pub const STRATEGY_TOLERANCE: f64 = 1e-4;

/// Strategies for computing the competition kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelStrategy {
    /// Direct double loop.
    #[serde(alias = "none")]
    Naive,
    /// Upper-triangle sweep using kernel symmetry.
    Triangular,
    /// Per-row reduction over all columns.
    #[serde(alias = "algo")]
    Fold,
    /// Rows partitioned across the rayon pool.
    #[serde(alias = "omp")]
    Parallel,
    /// Lane-blocked inner loop with scalar tail.
    #[serde(alias = "simd")]
    Vector,
    /// Parallel rows, lane-blocked inner loop.
    #[serde(alias = "simd_omp")]
    ParallelVector,
}

impl KernelStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [KernelStrategy; 6] = [
        Self::Naive,
        Self::Triangular,
        Self::Fold,
        Self::Parallel,
        Self::Vector,
        Self::ParallelVector,
    ];

    /// Canonical name, as accepted by [`FromStr`](std::str::FromStr).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Triangular => "triangular",
            Self::Fold => "fold",
            Self::Parallel => "parallel",
            Self::Vector => "vector",
            Self::ParallelVector => "parallel_vector",
        }
    }

    /// Self-interaction sums using the selected strategy.
    pub fn n_eff(&self, traits: &[f64], width: &KernelWidth) -> Vec<f64> {
        match self {
            Self::Naive => Naive.n_eff(traits, width),
            Self::Triangular => Triangular.n_eff(traits, width),
            Self::Fold => Fold.n_eff(traits, width),
            Self::Parallel => Parallel.n_eff(traits, width),
            Self::Vector => Vector.n_eff(traits, width),
            Self::ParallelVector => ParallelVector.n_eff(traits, width),
        }
    }

    /// Reference-against-population sums using the selected strategy.
    pub fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        match self {
            Self::Naive => Naive.n_eff_against(reference, population, width),
            Self::Triangular => Triangular.n_eff_against(reference, population, width),
            Self::Fold => Fold.n_eff_against(reference, population, width),
            Self::Parallel => Parallel.n_eff_against(reference, population, width),
            Self::Vector => Vector.n_eff_against(reference, population, width),
            Self::ParallelVector => ParallelVector.n_eff_against(reference, population, width),
        }
    }
}

impl Default for KernelStrategy {
    fn default() -> Self {
        Self::ParallelVector
    }
}

impl std::fmt::Display for KernelStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for KernelStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "naive" | "none" => Ok(Self::Naive),
            "triangular" => Ok(Self::Triangular),
            "fold" | "algo" => Ok(Self::Fold),
            "parallel" | "omp" => Ok(Self::Parallel),
            "vector" | "simd" => Ok(Self::Vector),
            "parallel_vector" | "simd_omp" => Ok(Self::ParallelVector),
            _ => Err(EngineError::InvalidArgument(format!(
                "Unknown kernel strategy: {s}. Available: naive, triangular, fold, parallel, vector, parallel_vector"
            ))),
        }
    }
}

/// Helper to provide trait access, though enum dispatch is preferred.
impl CompetitionKernel for KernelStrategy {
    fn n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        width: &KernelWidth,
    ) -> Vec<f64> {
        KernelStrategy::n_eff_against(self, reference, population, width)
    }

    fn n_eff(&self, traits: &[f64], width: &KernelWidth) -> Vec<f64> {
        KernelStrategy::n_eff(self, traits, width)
    }
}

/// Reject NaN and infinite trait values; they would turn weights into NaN.
fn check_finite(label: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|z| !z.is_finite()) {
        Some(index) => Err(EngineError::domain(format!(
            "{label} trait must be finite, got {} at index {index}",
            values[index]
        ))),
        None => Ok(()),
    }
}

/// Gaussian interaction weight between two traits for competition width `sigma`.
pub fn pairwise_weight(a: f64, b: f64, sigma: f64) -> Result<f64> {
    let width = KernelWidth::new(sigma)?;
    check_finite("pair", &[a, b])?;
    Ok(width.weight(a, b))
}

/// Effective population size of every individual in `traits`.
///
/// # Errors
/// [`EngineError::Domain`] if `sigma` is not a finite positive number or any
/// trait is NaN or infinite.
pub fn compute_n_eff(traits: &[f64], sigma: f64, strategy: KernelStrategy) -> Result<Vec<f64>> {
    let width = KernelWidth::new(sigma)?;
    check_finite("community", traits)?;
    debug!(%strategy, n = traits.len(), sigma, "computing n_eff");
    Ok(strategy.n_eff(traits, &width))
}

/// Effective population size each `reference` trait experiences from a
/// separate `population`, using the default strategy.
///
/// No self-pairing is assumed: a reference trait only interacts with itself if
/// its value is also present in `population`.
pub fn compute_n_eff_against(
    reference: &[f64],
    population: &[f64],
    sigma: f64,
) -> Result<Vec<f64>> {
    compute_n_eff_against_with(reference, population, sigma, KernelStrategy::default())
}

/// [`compute_n_eff_against`] with an explicit strategy.
pub fn compute_n_eff_against_with(
    reference: &[f64],
    population: &[f64],
    sigma: f64,
    strategy: KernelStrategy,
) -> Result<Vec<f64>> {
    let width = KernelWidth::new(sigma)?;
    check_finite("reference", reference)?;
    check_finite("population", population)?;
    debug!(
        %strategy,
        n_ref = reference.len(),
        n_pop = population.len(),
        sigma,
        "computing n_eff against population"
    );
    Ok(strategy.n_eff_against(reference, population, &width))
}

/// Whether two `n_eff` vectors agree entry-wise within relative tolerance `rel_tol`.
///
/// # Errors
/// [`EngineError::LengthMismatch`] if the vectors differ in length.
pub fn n_eff_agree(a: &[f64], b: &[f64], rel_tol: f64) -> Result<bool> {
    if a.len() != b.len() {
        return Err(EngineError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).all(|(&x, &y)| {
        let scale = x.abs().max(y.abs()).max(f64::MIN_POSITIVE);
        (x - y).abs() <= rel_tol * scale
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_single_individual() {
        for sigma in [0.01, 1.0, 250.0] {
            for strategy in KernelStrategy::ALL {
                assert_eq!(compute_n_eff(&[3.7], sigma, strategy).unwrap(), vec![1.0]);
            }
        }
    }

    #[test]
    fn test_identical_traits() {
        for strategy in KernelStrategy::ALL {
            let n_eff = compute_n_eff(&[0.0, 0.0, 0.0], 1.0, strategy).unwrap();
            assert_eq!(n_eff, vec![3.0, 3.0, 3.0], "{strategy}");
        }
    }

    #[test]
    fn test_empty_input() {
        for strategy in KernelStrategy::ALL {
            assert!(compute_n_eff(&[], 1.0, strategy).unwrap().is_empty());
            assert!(compute_n_eff_against_with(&[], &[1.0], 1.0, strategy)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn test_degenerate_sigma_is_domain_error() {
        for sigma in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                compute_n_eff(&[0.0, 1.0], sigma, KernelStrategy::Naive),
                Err(EngineError::Domain(_))
            ));
            assert!(matches!(
                compute_n_eff_against(&[0.0], &[1.0], sigma),
                Err(EngineError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_traits_are_domain_errors() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for strategy in KernelStrategy::ALL {
                let err = compute_n_eff(&[0.0, bad], 1.0, strategy).unwrap_err();
                assert!(matches!(err, EngineError::Domain(ref m) if m.contains("index 1")));
            }
            assert!(matches!(
                compute_n_eff_against(&[bad], &[0.0], 1.0),
                Err(EngineError::Domain(_))
            ));
            assert!(matches!(
                compute_n_eff_against(&[0.0], &[1.0, 2.0, bad], 1.0),
                Err(EngineError::Domain(ref m)) if m.contains("population") && m.contains("index 2")
            ));
            assert!(pairwise_weight(bad, 0.0, 1.0).is_err());
        }
        // Far apart but finite traits are fine: the weight underflows to 0.
        assert_eq!(
            compute_n_eff(&[-1e200, 1e200], 1.0, KernelStrategy::Naive).unwrap(),
            vec![1.0, 1.0]
        );
    }

    #[test]
    fn test_against_has_no_implicit_self_pair() {
        // Far-away population: nothing interacts, not even "self".
        let n_eff = compute_n_eff_against(&[0.0, 1.0], &[1e3, 2e3], 1.0).unwrap();
        assert_eq!(n_eff, vec![0.0, 0.0]);
    }

    #[test]
    fn test_against_equals_self_when_same_pool() {
        let traits = [0.5, -0.2, 1.7, 3.0, 0.45];
        let self_n = compute_n_eff(&traits, 0.9, KernelStrategy::Naive).unwrap();
        for strategy in KernelStrategy::ALL {
            let against = compute_n_eff_against_with(&traits, &traits, 0.9, strategy).unwrap();
            assert!(n_eff_agree(&self_n, &against, STRATEGY_TOLERANCE).unwrap());
        }
    }

    #[test]
    fn test_pairwise_weight_symmetric_and_monotone() {
        let sigma = 1.5;
        let mut previous = pairwise_weight(2.0, 2.0, sigma).unwrap();
        assert_eq!(previous, 1.0);
        for step in 1..20 {
            let d = step as f64 * 0.25;
            let ab = pairwise_weight(2.0, 2.0 + d, sigma).unwrap();
            let ba = pairwise_weight(2.0 + d, 2.0, sigma).unwrap();
            assert_eq!(ab, ba);
            assert!(ab < previous);
            previous = ab;
        }
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in KernelStrategy::ALL {
            assert_eq!(KernelStrategy::from_str(strategy.name()).unwrap(), strategy);
        }
        assert_eq!(
            KernelStrategy::from_str("simd_omp").unwrap(),
            KernelStrategy::ParallelVector
        );
        assert!(matches!(
            KernelStrategy::from_str("quantum"),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&KernelStrategy::ParallelVector).unwrap();
        assert_eq!(json, "\"parallel_vector\"");
        let parsed: KernelStrategy = serde_json::from_str("\"omp\"").unwrap();
        assert_eq!(parsed, KernelStrategy::Parallel);
    }

    #[test]
    fn test_agree_length_mismatch() {
        assert_eq!(
            n_eff_agree(&[1.0, 2.0], &[1.0], 1e-4),
            Err(EngineError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(n_eff_agree(&[1.0, 2.0], &[1.00001, 2.0], 1e-4).unwrap());
        assert!(!n_eff_agree(&[1.0, 2.0], &[1.1, 2.0], 1e-4).unwrap());
    }
}
