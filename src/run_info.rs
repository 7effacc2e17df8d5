/// Information on a summation run.
///
/// Filled in by [`Executor::run`][crate::Executor::run].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunInfo {
    /// Sum of all integers in `[0, total)`.
    pub result: i128,

    /// Number of workers requested.
    pub workers: usize,

    /// Number of ranges the work was split into.  Can be lower than
    /// `workers`.
    pub partitions: usize,

    /// Number of threads in the pool that summed the ranges.
    pub threads: usize,
}

impl RunInfo {
    /// Run that had nothing to sum.
    pub fn skip(workers: usize) -> RunInfo {
        RunInfo {
            result: 0,
            workers,
            partitions: 0,
            threads: 0,
        }
    }
}
