mod fold;
mod naive;
mod parallel;
mod parallel_vector;
mod triangular;
mod vector;

pub use fold::Fold;
pub use naive::Naive;
pub use parallel::Parallel;
pub use parallel_vector::ParallelVector;
pub use triangular::Triangular;
pub use vector::{Vector, LANES};

/// Minimum number of output rows handed to a single rayon task.
///
/// Below this a row is cheaper to compute than to schedule.
pub(crate) const MIN_ROWS_PER_TASK: usize = 32;
