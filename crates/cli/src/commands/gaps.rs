use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use sympatric_kernel::{find_trait_gaps, EngineConfig, SortedTraits};

use crate::io::{read_values, write_json};

#[derive(Serialize)]
struct GapReport<'a> {
    sorted: &'a [f64],
    gaps: Vec<usize>,
}

/// Sort the traits (or check they already are) and report gap positions.
///
/// Positions index into `sorted`, which is printed alongside them.
pub fn gaps(input: &Path, presorted: bool, config: &EngineConfig) -> Result<()> {
    let traits = read_values(input)?;
    let sorted = if presorted {
        SortedTraits::from_sorted(traits).context("Input passed with --presorted is not ascending")?
    } else {
        SortedTraits::from_unsorted(traits)
    };
    let gaps = find_trait_gaps(&sorted, config.min_gap)?;
    write_json(&GapReport {
        sorted: &sorted,
        gaps,
    })
}
