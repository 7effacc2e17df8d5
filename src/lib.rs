//! Parallel range partitioning and reduction.
//!
//! # Crate Layout
//!
//! Work is described by a [`PartitionPlan`], produced by [`split`] from a
//! total size and a worker count.  The plan's [`Range`]s are then summed
//! concurrently by an [`Executor`], which folds every partial result into a
//! single total.
//!
//! ```rust
//! # fn main() -> Result<(), rangesum::Error> {
//! let plan = rangesum::split(10, 3);
//! assert_eq!(plan.pairs(), vec![(0, 4), (4, 8), (8, 10)]);
//!
//! assert_eq!(rangesum::sum_numbers(10, Some(3))?, 45);
//! # Ok(())
//! # }
//! ```
//!
//! The per-partition work can be watched through an [`Observer`].  Observers
//! are called from worker threads in no particular order and have no say in
//! the result.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod executor;
mod observer;
mod range;
mod run_info;
mod work_share;


pub use crate::executor::clamp_workers;
pub use crate::executor::default_workers;
pub use crate::executor::sum_numbers;
pub use crate::executor::Executor;
pub use crate::observer::Observer;
pub use crate::observer::TraceObserver;
pub use crate::range::Range;
pub use crate::range::SumMethod;
pub use crate::run_info::RunInfo;
pub use crate::work_share::split;
pub use crate::work_share::work_share;
pub use crate::work_share::PartitionPlan;

pub use rayon;

use std::fmt;

/// Errors returned by the [`Executor`].
///
/// Partitioning itself never fails; only the concurrency machinery can.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The worker pool could not be created.
    ThreadPool(rayon::ThreadPoolBuildError),

    /// A worker panicked while summing its range.  Partial results are
    /// discarded.
    WorkerPanicked { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ThreadPool(err) => write!(f, "failed to build worker pool: {err}"),
            Error::WorkerPanicked { message } => write!(f, "worker panicked: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ThreadPool(err) => Some(err),
            Error::WorkerPanicked { .. } => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(err)
    }
}
