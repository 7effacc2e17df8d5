use crate::Range;

/// Hook called each time a worker finishes summing its range.
///
/// Calls come from worker threads, in no particular order, and at most once
/// per range.  They are purely informative: the value returned by the
/// [`Executor`][crate::Executor] does not depend on them.
///
/// Closures of type `Fn(Range, i128)` implement this trait.
pub trait Observer: Send + Sync {
    fn partial(&self, range: Range, value: i128);
}

impl<F> Observer for F
where
    F: Fn(Range, i128) + Send + Sync,
{
    fn partial(&self, range: Range, value: i128) {
        self(range, value)
    }
}

/// Reports every partial result as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn partial(&self, range: Range, value: i128) {
        tracing::info!(start = range.start(), end = range.end(), result = %value, "partial sum");
    }
}
