use anyhow::{Context, Result};
use std::path::Path;
use sympatric_kernel::{EngineConfig, OffspringSampler};

use crate::io::{read_values, write_json};

pub fn offspring(input: &Path, parallel: bool, config: &EngineConfig) -> Result<()> {
    let fitness = read_values(input)?;
    let mut rng = config.rng();

    let counts = if parallel {
        OffspringSampler.draw_par(&fitness, &mut rng)
    } else {
        OffspringSampler.draw(&fitness, &mut rng)
    }
    .context("Failed to draw offspring counts")?;
    write_json(&counts)
}
