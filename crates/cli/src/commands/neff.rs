use anyhow::{Context, Result};
use std::path::Path;
use sympatric_kernel::EngineConfig;

use crate::io::{read_values, write_json};

pub fn neff(input: &Path, config: &EngineConfig) -> Result<()> {
    let traits = read_values(input)?;
    let n_eff = config
        .kernel
        .compute(&traits)
        .context("Failed to compute effective population sizes")?;
    write_json(&n_eff)
}

pub fn neff_against(reference: &Path, population: &Path, config: &EngineConfig) -> Result<()> {
    let reference = read_values(reference)?;
    let population = read_values(population)?;
    let n_eff = config
        .kernel
        .compute_against(&reference, &population)
        .context("Failed to compute effective population sizes against population")?;
    write_json(&n_eff)
}
