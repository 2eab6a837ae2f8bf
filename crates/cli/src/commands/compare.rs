use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::path::Path;
use std::time::Instant;
use sympatric_kernel::{n_eff_agree, EngineConfig, KernelStrategy, STRATEGY_TOLERANCE};

use crate::defaults::{RANDOM_COMMUNITY_SIZE, RANDOM_TRAIT_SEED, RANDOM_TRAIT_SPREAD};
use crate::io::read_values;
use crate::printing::{print_comparison, StrategyTiming};

/// Run every kernel strategy on the same community and check they agree.
pub fn compare(input: Option<&Path>, random: Option<usize>, config: &EngineConfig) -> Result<()> {
    let traits = match input {
        Some(path) => read_values(path)?,
        None => {
            let n = random.unwrap_or(RANDOM_COMMUNITY_SIZE);
            let seed = config.seed.unwrap_or(RANDOM_TRAIT_SEED);
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            (0..n)
                .map(|_| rng.random_range(-RANDOM_TRAIT_SPREAD..RANDOM_TRAIT_SPREAD))
                .collect()
        }
    };
    let width = config.kernel.width()?;

    let baseline = KernelStrategy::Naive.n_eff(&traits, &width);
    let mut rows = Vec::with_capacity(KernelStrategy::ALL.len());
    for strategy in KernelStrategy::ALL {
        let start = Instant::now();
        let n_eff = strategy.n_eff(&traits, &width);
        let elapsed = start.elapsed();

        let max_rel_diff = baseline
            .iter()
            .zip(&n_eff)
            .map(|(a, b)| (a - b).abs() / a.abs().max(f64::MIN_POSITIVE))
            .fold(0.0, f64::max);
        rows.push(StrategyTiming {
            strategy,
            elapsed,
            max_rel_diff,
            agrees: n_eff_agree(&baseline, &n_eff, STRATEGY_TOLERANCE)?,
        });
    }

    print_comparison(traits.len(), width.sigma(), &rows);

    if rows.iter().any(|r| !r.agrees) {
        bail!("Kernel strategies disagree beyond relative tolerance {STRATEGY_TOLERANCE:e}");
    }
    Ok(())
}
