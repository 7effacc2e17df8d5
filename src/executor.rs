use crate::split;
use crate::Error;
use crate::Observer;
use crate::RunInfo;
use crate::SumMethod;
use rayon::iter::IntoParallelRefIterator as _;
use rayon::iter::ParallelIterator as _;
use std::any::Any;
use std::fmt;
use std::num::NonZeroUsize;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Number of workers to use when none is given: the number of logical CPUs,
/// or one if it cannot be detected.
pub fn default_workers() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

/// Sum all integers in `[0, total)` with `workers` threads.
///
/// `None` means [`default_workers()`].  A worker count below one is treated
/// as one, and a non-positive `total` gives zero without spawning any thread.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), rangesum::Error> {
/// assert_eq!(rangesum::sum_numbers(1_000_000, Some(8))?, 499_999_500_000);
/// assert_eq!(rangesum::sum_numbers(0, None)?, 0);
/// # Ok(())
/// # }
/// ```
pub fn sum_numbers(total: i64, workers: Option<i64>) -> Result<i128, Error> {
    let workers = match workers {
        Some(workers) => clamp_workers(workers),
        None => default_workers(),
    };
    Executor::new(workers).sum(total)
}

/// Convert a worker count given as a signed integer, treating anything below
/// one as one.
pub fn clamp_workers(workers: i64) -> NonZeroUsize {
    let workers = usize::try_from(i64::max(1, workers)).unwrap_or(usize::MAX);
    NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN)
}

/// Sums integer ranges on a dedicated pool of threads.
///
/// Each call to [`run`][Executor::run] splits the range with
/// [`split`][crate::split], spawns one thread per resulting range, and adds
/// up the partial sums once every thread is done.  The pool only lives for
/// the duration of the call, so an `Executor` holds no state between runs.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), rangesum::Error> {
/// use rangesum::Executor;
/// use rangesum::Range;
/// use rangesum::SumMethod;
/// use std::num::NonZeroUsize;
///
/// let executor = Executor::new(NonZeroUsize::new(3).unwrap())
///     .method(SumMethod::Iterative)
///     .observer(|range: Range, value: i128| println!("{range}: {value}"));
///
/// let info = executor.run(10)?;
/// assert_eq!(info.result, 45);
/// assert_eq!(info.partitions, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Executor {
    workers: NonZeroUsize,
    method: SumMethod,
    observer: Option<Arc<dyn Observer>>,
}

impl Executor {
    pub fn new(workers: NonZeroUsize) -> Executor {
        Executor {
            workers,
            method: SumMethod::default(),
            observer: None,
        }
    }

    /// Set how workers compute the sum of their range.
    pub fn method(mut self, method: SumMethod) -> Executor {
        self.method = method;
        self
    }

    /// Call `observer` each time a range has been summed.
    pub fn observer(mut self, observer: impl Observer + 'static) -> Executor {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Sum all integers in `[0, total)`.
    pub fn sum(&self, total: i64) -> Result<i128, Error> {
        self.run(total).map(|info| info.result)
    }

    /// Sum all integers in `[0, total)` and report how the work was shared.
    ///
    /// Fails if the thread pool cannot be created or if a worker panics.  In
    /// both cases, no partial result is returned.
    pub fn run(&self, total: i64) -> Result<RunInfo, Error> {
        let workers = self.workers.get();
        let span = tracing::info_span!("sum", total, workers);
        let _enter = span.enter();

        let plan = split(total, i64::try_from(workers).unwrap_or(i64::MAX));
        tracing::debug!(partitions = plan.len(), "split: {:?}", plan.pairs());
        if plan.is_empty() {
            return Ok(RunInfo::skip(workers));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(plan.len())
            .thread_name(|i| format!("rangesum-{i}"))
            .build()?;

        let method = self.method;
        let observer = self.observer.as_deref();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.install(|| {
                plan.ranges()
                    .par_iter()
                    .map(|&range| {
                        let value = range.sum(method);
                        if let Some(observer) = observer {
                            observer.partial(range, value);
                        }
                        value
                    })
                    .sum::<i128>()
            })
        }))
        .map_err(|payload| Error::WorkerPanicked {
            message: panic_message(payload.as_ref()),
        })?;

        let threads = pool.current_num_threads();
        tracing::info!(%result, threads);
        Ok(RunInfo {
            result,
            workers,
            partitions: plan.len(),
            threads,
        })
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("workers", &self.workers)
            .field("method", &self.method)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic payload")
    }
}
