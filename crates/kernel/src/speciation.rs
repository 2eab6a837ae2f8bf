//! Gap-based cluster detection.
//!
//! Sorting a community's traits and looking for large spacings between
//! neighbours reveals phenotype clusters drifting apart. The positions returned
//! by [`find_trait_gaps`] are the first index after each gap; splitting the
//! community into lineages at those positions is left to the caller.

use crate::errors::{EngineError, Result};
use std::cmp::Ordering;
use std::ops::Deref;
use tracing::debug;

/// Absolute slack on the gap threshold, absorbing round-off in trait
/// differences that are meant to equal `min_gap` exactly.
pub const GAP_TOLERANCE: f64 = 1e-10;

/// Trait values in non-decreasing order.
///
/// Only obtainable from [`sort_ascending`], [`SortedTraits::from_unsorted`] or
/// the checked [`SortedTraits::from_sorted`], so gap detection never sees an
/// unsorted sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedTraits(Vec<f64>);

impl SortedTraits {
    /// Sort `traits` in place and wrap them.
    ///
    /// Uses [`f64::total_cmp`], so NaNs are ordered rather than panicking.
    pub fn from_unsorted(mut traits: Vec<f64>) -> Self {
        traits.sort_unstable_by(f64::total_cmp);
        Self(traits)
    }

    /// Wrap traits the caller claims are already ascending, checking the claim
    /// in one pass.
    ///
    /// # Errors
    /// [`EngineError::NotSorted`] with the first index that is smaller than its
    /// predecessor (or where either value is NaN).
    pub fn from_sorted(traits: Vec<f64>) -> Result<Self> {
        let out_of_order = |w: &[f64]| {
            !matches!(
                w[0].partial_cmp(&w[1]),
                Some(Ordering::Less | Ordering::Equal)
            )
        };
        if let Some(i) = traits.windows(2).position(out_of_order) {
            return Err(EngineError::NotSorted { index: i + 1 });
        }
        Ok(Self(traits))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for SortedTraits {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for SortedTraits {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for SortedTraits {
    type Error = EngineError;

    fn try_from(traits: Vec<f64>) -> Result<Self> {
        Self::from_sorted(traits)
    }
}

/// Copy of `traits` in non-decreasing order. Ties are in unspecified order.
pub fn sort_ascending(traits: &[f64]) -> SortedTraits {
    SortedTraits::from_unsorted(traits.to_vec())
}

/// Indices `i` such that `sorted[i] - sorted[i - 1] >= min_gap - GAP_TOLERANCE`,
/// in ascending order.
///
/// Each index points at the first individual after a gap. Empty and
/// single-element inputs have no gaps.
///
/// # Errors
/// [`EngineError::Domain`] if `min_gap` is negative or not finite.
pub fn find_trait_gaps(sorted: &SortedTraits, min_gap: f64) -> Result<Vec<usize>> {
    if !min_gap.is_finite() || min_gap < 0.0 {
        return Err(EngineError::domain(format!(
            "min_gap must be finite and >= 0, got {min_gap}"
        )));
    }
    let threshold = min_gap - GAP_TOLERANCE;
    let gaps: Vec<usize> = sorted
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] - w[0] >= threshold)
        .map(|(i, _)| i + 1)
        .collect();
    debug!(n = sorted.len(), min_gap, gaps = gaps.len(), "trait gaps");
    Ok(gaps)
}
