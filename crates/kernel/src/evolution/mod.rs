//! Stochastic per-generation operators.
//!
//! - **Mutation**: Gaussian perturbation of each individual's trait
//! - **Offspring**: Poisson offspring counts from fitness values
//!
//! Every operator takes its random source explicitly. Parallel variants derive
//! one independent Xoshiro256++ stream per chunk of individuals from that
//! source, so results are reproducible for a given seed regardless of how many
//! threads run.

pub mod mutation;
pub mod offspring;

pub use mutation::{apply_mutation, TraitMutator};
pub use offspring::{assemble_offspring, draw_offspring_counts, OffspringSampler};

use rand::Rng;

/// Individuals handled by one parallel worker stream.
pub(crate) const STREAM_CHUNK: usize = 1024;

/// One seed per [`STREAM_CHUNK`]-sized block of `len` individuals.
pub(crate) fn stream_seeds<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u64> {
    let seeds: Vec<u64> = (0..len.div_ceil(STREAM_CHUNK))
        .map(|_| rng.random())
        .collect();
    tracing::trace!(streams = seeds.len(), "derived worker seeds");
    seeds
}
