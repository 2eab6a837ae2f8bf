//! Shared default values for command-line flags.
//! Used when neither a flag nor the `--config` file provides a value.

/// Community size for `compare --random`.
pub const RANDOM_COMMUNITY_SIZE: usize = 2_000;
/// Half-width of the uniform range random traits are drawn from.
pub const RANDOM_TRAIT_SPREAD: f64 = 3.0;
/// Seed for `compare --random` when no seed is configured.
pub const RANDOM_TRAIT_SEED: u64 = 0x5EED;
