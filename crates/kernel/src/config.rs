//! Engine configuration.
//!
//! One serializable struct holds every parameter the per-generation operators
//! need, so a run can be reproduced from a single JSON file.

use crate::errors::{EngineError, Result};
use crate::evolution::TraitMutator;
use crate::kernel::CompetitionKernelConfig;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Competition kernel width and strategy
    #[serde(default)]
    pub kernel: CompetitionKernelConfig,
    /// Standard deviation of trait mutations (>= 0)
    #[serde(default)]
    pub mutation_sd: f64,
    /// Minimal trait spacing flagged as a cluster boundary (>= 0)
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min_gap() -> f64 {
    0.5
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kernel: CompetitionKernelConfig::default(),
            mutation_sd: 0.0,
            min_gap: default_min_gap(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<()> {
        self.kernel.validate()?;
        TraitMutator::new(self.mutation_sd)?;
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(EngineError::Domain(format!(
                "min_gap must be finite and >= 0, got {}",
                self.min_gap
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn mutator(&self) -> Result<TraitMutator> {
        TraitMutator::new(self.mutation_sd)
    }

    /// Random source for this run: seeded if `seed` is set, otherwise from OS
    /// entropy via the thread RNG.
    pub fn rng(&self) -> Xoshiro256PlusPlus {
        match self.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }
}
