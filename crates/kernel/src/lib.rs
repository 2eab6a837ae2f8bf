//! # Sympatric Kernel
//!
//! The per-generation engine of an individual-based model of trait evolution
//! under competition. Each individual carries one continuous trait; a
//! generation consists of:
//!
//! 1. **Mutation** ([`evolution::mutation`]): Gaussian noise on every trait.
//! 2. **Competition** ([`kernel`]): each individual's effective population size
//!    `n_eff`, the Gaussian-weighted count of similar individuals.
//! 3. **Reproduction** ([`evolution::offspring`]): Poisson offspring counts from
//!    fitness values, which a caller-supplied model derives from `n_eff`.
//! 4. **Speciation** ([`speciation`]): large gaps in the sorted traits mark
//!    candidate lineage splits.
//!
//! The generation loop, the fitness model and lineage bookkeeping belong to
//! the caller.

pub mod config;
pub mod errors;
pub mod evolution;
pub mod kernel;
pub mod prelude;
pub mod speciation;

pub use config::EngineConfig;
pub use errors::EngineError as Error;
pub use errors::EngineError;
pub use evolution::{
    apply_mutation, assemble_offspring, draw_offspring_counts, OffspringSampler, TraitMutator,
};
pub use kernel::{
    compute_n_eff, compute_n_eff_against, compute_n_eff_against_with, n_eff_agree,
    pairwise_weight, CompetitionKernel, CompetitionKernelConfig, KernelStrategy,
    KernelStrategyRegistry, KernelWidth, STRATEGY_TOLERANCE,
};
pub use speciation::{find_trait_gaps, sort_ascending, SortedTraits, GAP_TOLERANCE};
