use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use sympatric_kernel::{EngineConfig, KernelStrategy};

/// Competition-kernel flags shared by the `neff*` and `compare` commands.
#[derive(Args, Debug, Default)]
pub struct KernelArgs {
    /// Competition kernel width (standard deviation, > 0)
    #[arg(short, long)]
    pub sigma: Option<f64>,

    /// Kernel strategy: naive, triangular, fold, parallel, vector, parallel_vector
    #[arg(long)]
    pub strategy: Option<KernelStrategy>,
}

/// Values given on the command line that take precedence over `--config`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub sigma: Option<f64>,
    pub strategy: Option<KernelStrategy>,
    pub mutation_sd: Option<f64>,
    pub min_gap: Option<f64>,
    pub seed: Option<u64>,
}

impl From<&KernelArgs> for Overrides {
    fn from(args: &KernelArgs) -> Self {
        Self {
            sigma: args.sigma,
            strategy: args.strategy,
            ..Default::default()
        }
    }
}

/// Load the configuration file (or defaults), apply overrides, validate.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(sigma) = overrides.sigma {
        config.kernel.sigma = sigma;
    }
    if let Some(strategy) = overrides.strategy {
        config.kernel.strategy = strategy;
    }
    if let Some(sd) = overrides.mutation_sd {
        config.mutation_sd = sd;
    }
    if let Some(min_gap) = overrides.min_gap {
        config.min_gap = min_gap;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }

    config.validate().context("Invalid engine parameters")?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Global options visible to every subcommand.
#[derive(Debug)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl GlobalOpts {
    pub fn resolve(&self, mut overrides: Overrides) -> Result<EngineConfig> {
        overrides.seed = overrides.seed.or(self.seed);
        resolve_config(self.config.as_deref(), overrides)
    }
}
