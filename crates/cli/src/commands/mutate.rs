use anyhow::Result;
use std::path::Path;
use sympatric_kernel::EngineConfig;

use crate::io::{read_values, write_json};

pub fn mutate(input: &Path, parallel: bool, config: &EngineConfig) -> Result<()> {
    let traits = read_values(input)?;
    let mutator = config.mutator()?;
    let mut rng = config.rng();

    let mutated = if parallel {
        mutator.apply_par(&traits, &mut rng)
    } else {
        mutator.apply(&traits, &mut rng)
    };
    write_json(&mutated)
}
