//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use sympatric_kernel::prelude::*;
//!
//! let n_eff = compute_n_eff(&[0.0, 0.0, 0.0], 1.0, KernelStrategy::Naive).unwrap();
//! assert_eq!(n_eff, vec![3.0, 3.0, 3.0]);
//!
//! let sorted = sort_ascending(&[11.0, 0.0, 12.0, 1.0, 10.0, 2.0]);
//! assert_eq!(find_trait_gaps(&sorted, 5.0).unwrap(), vec![3]);
//! ```

pub use crate::config::EngineConfig;
pub use crate::errors::{self, EngineError};
pub use crate::evolution::{
    apply_mutation, assemble_offspring, draw_offspring_counts, OffspringSampler, TraitMutator,
};
pub use crate::kernel::{
    compute_n_eff, compute_n_eff_against, compute_n_eff_against_with, CompetitionKernelConfig,
    KernelStrategy, KernelStrategyRegistry,
};
pub use crate::speciation::{find_trait_gaps, sort_ascending, SortedTraits};
