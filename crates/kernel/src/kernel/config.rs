use crate::errors::Result;
use crate::kernel::{KernelStrategy, KernelWidth};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Competition width plus the strategy used to evaluate the kernel.
///
/// [`CompetitionKernelConfig::new`] validates `sigma`. Deserialization does
/// not, so a deserialized config must go through
/// [`CompetitionKernelConfig::validate`] (as [`EngineConfig::from_json`](crate::config::EngineConfig::from_json)
/// does); `compute` still rejects a bad `sigma` either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompetitionKernelConfig {
    /// Standard deviation of the Gaussian competition kernel (> 0).
    pub sigma: f64,
    /// Computation strategy; never changes results beyond rounding.
    #[serde(default)]
    pub strategy: KernelStrategy,
}

impl CompetitionKernelConfig {
    pub fn new(sigma: f64, strategy: KernelStrategy) -> Result<Self> {
        KernelWidth::new(sigma)?;
        Ok(Self { sigma, strategy })
    }

    pub fn validate(&self) -> Result<()> {
        KernelWidth::new(self.sigma).map(|_| ())
    }

    pub fn width(&self) -> Result<KernelWidth> {
        KernelWidth::new(self.sigma)
    }

    /// Effective population sizes of a community against itself.
    pub fn compute(&self, traits: &[f64]) -> Result<Vec<f64>> {
        super::compute_n_eff(traits, self.sigma, self.strategy)
    }

    /// Effective population sizes of `reference` against `population`.
    pub fn compute_against(&self, reference: &[f64], population: &[f64]) -> Result<Vec<f64>> {
        super::compute_n_eff_against_with(reference, population, self.sigma, self.strategy)
    }
}

impl Default for CompetitionKernelConfig {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            strategy: KernelStrategy::default(),
        }
    }
}

/// Name-addressable selection of the default kernel strategy.
///
/// Owned by the caller rather than shared process-wide: a driver that needs a
/// fixed strategy per call passes it explicitly, and a driver that wants a
/// mutable default keeps one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelStrategyRegistry {
    current: KernelStrategy,
}

impl KernelStrategyRegistry {
    pub fn new(default: KernelStrategy) -> Self {
        Self { current: default }
    }

    /// Select the default strategy by name.
    ///
    /// On an unrecognized name returns [`EngineError::InvalidArgument`](crate::errors::EngineError::InvalidArgument)
    /// and keeps the previous selection.
    pub fn set_kernel_strategy(&mut self, name: &str) -> Result<()> {
        match name.parse::<KernelStrategy>() {
            Ok(strategy) => {
                debug!(from = %self.current, to = %strategy, "kernel strategy changed");
                self.current = strategy;
                Ok(())
            }
            Err(e) => {
                warn!(name, current = %self.current, "rejected kernel strategy");
                Err(e)
            }
        }
    }

    pub fn get_kernel_strategy(&self) -> KernelStrategy {
        self.current
    }

    /// Canonical names of every registered strategy.
    pub fn available(&self) -> impl Iterator<Item = &'static str> {
        KernelStrategy::ALL.into_iter().map(|s| s.name())
    }

    /// [`compute_n_eff`](super::compute_n_eff) with the selected strategy.
    pub fn compute_n_eff(&self, traits: &[f64], sigma: f64) -> Result<Vec<f64>> {
        super::compute_n_eff(traits, sigma, self.current)
    }

    /// [`compute_n_eff_against_with`](super::compute_n_eff_against_with) with the selected strategy.
    pub fn compute_n_eff_against(
        &self,
        reference: &[f64],
        population: &[f64],
        sigma: f64,
    ) -> Result<Vec<f64>> {
        super::compute_n_eff_against_with(reference, population, sigma, self.current)
    }
}
