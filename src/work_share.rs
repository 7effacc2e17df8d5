use crate::Range;
use itertools::Itertools as _;
use std::slice;
use std::vec;

/// Split `total` among a given number of workers.
///
/// Returns `(chunk_size, chunk_count)`, where `chunk_size` is the maximum
/// amount of work a worker gets, and `chunk_count` is the amount of workers
/// that have actual work (chunks are cut in order, thus the last one may be
/// smaller than `chunk_size`).
///
/// Returns `(0, 0)` if `total` is not positive.  A `workers` below one is
/// treated as one.
pub fn work_share(total: i64, workers: i64) -> (i64, i64) {
    if total <= 0 {
        return (0, 0);
    }
    let workers = i64::max(1, workers);

    // ceil(total / workers)
    let chunk_size = div_ceil(total, workers);

    // ceil(total / chunk_size)
    let chunk_count = div_ceil(total, chunk_size);

    (chunk_size, chunk_count)
}

/// `ceil(n / d)` for positive `n` and `d`, without overflowing.
fn div_ceil(n: i64, d: i64) -> i64 {
    debug_assert!(0 < n && 0 < d);
    n / d + i64::from(n % d != 0)
}

/// Split `[0, total)` into at most `workers` contiguous ranges.
///
/// Every range is `ceil(total / workers)` long, except the last one which is
/// truncated to end at `total`.  When `workers` is large compared to `total`,
/// fewer ranges than workers are returned: `split(2, 5)` gives two
/// single-element ranges.
///
/// The plan is empty if `total` is not positive.  A `workers` below one is
/// treated as one.
///
/// # Example
///
/// ```rust
/// let plan = rangesum::split(10, 3);
/// assert_eq!(plan.pairs(), vec![(0, 4), (4, 8), (8, 10)]);
/// ```
pub fn split(total: i64, workers: i64) -> PartitionPlan {
    let (chunk_size, chunk_count) = work_share(total, workers);
    let ranges: Vec<Range> = (0..chunk_count)
        .map(|chunk| {
            let start = chunk * chunk_size;
            let end = i64::min(start.saturating_add(chunk_size), total);
            Range::new(start, end)
        })
        .collect();

    debug_assert!(ranges
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.end() == b.start()));

    PartitionPlan { ranges }
}

/// Ordered, disjoint ranges that cover `[0, total)` exactly once.
///
/// Built by [`split`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionPlan {
    ranges: Vec<Range>,
}

impl PartitionPlan {
    /// Number of ranges in the plan.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn iter(&self) -> slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    /// Sum of the lengths of all ranges, i.e. the `total` the plan was built
    /// from (or zero).
    pub fn total_len(&self) -> i64 {
        self.ranges.iter().map(|range| range.len()).sum()
    }

    /// The plan as `(start, end)` pairs.
    pub fn pairs(&self) -> Vec<(i64, i64)> {
        self.ranges.iter().map(|&range| range.into()).collect()
    }
}

impl IntoIterator for PartitionPlan {
    type Item = Range;
    type IntoIter = vec::IntoIter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a PartitionPlan {
    type Item = &'a Range;
    type IntoIter = slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools as _;
    use proptest::prelude::*;

    #[test]
    fn test_work_share() {
        assert_eq!(work_share(100, 4), (25, 4));
        assert_eq!(work_share(101, 4), (26, 4));

        assert_eq!(work_share(100, 20), (5, 20));
        assert_eq!(work_share(101, 20), (6, 17));

        assert_eq!(work_share(100, 100), (1, 100));
        assert_eq!(work_share(100, 101), (1, 100));

        assert_eq!(work_share(100, 1), (100, 1));
        assert_eq!(work_share(100, 2), (50, 2));
        assert_eq!(work_share(100, 3), (34, 3));
        assert_eq!(work_share(1, 100), (1, 1));
        assert_eq!(work_share(2, 100), (1, 2));
        assert_eq!(work_share(3, 100), (1, 3));

        assert_eq!(work_share(0, 4), (0, 0));
        assert_eq!(work_share(-5, 4), (0, 0));
        assert_eq!(work_share(10, 0), (10, 1));
        assert_eq!(work_share(10, -3), (10, 1));
    }

    #[test]
    fn test_split() {
        assert_eq!(split(10, 3).pairs(), vec![(0, 4), (4, 8), (8, 10)]);
        assert_eq!(split(5, 1).pairs(), vec![(0, 5)]);
        assert_eq!(split(2, 5).pairs(), vec![(0, 1), (1, 2)]);

        assert_eq!(split(7, 4).pairs(), vec![(0, 2), (2, 4), (4, 6), (6, 7)]);

        // Chunks of 3, the fourth worker gets nothing.
        assert_eq!(split(9, 4).pairs(), vec![(0, 3), (3, 6), (6, 9)]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split(0, 4).is_empty());
        assert!(split(-1, 4).is_empty());
        assert!(split(i64::MIN, 1).is_empty());
        assert_eq!(split(0, 4).total_len(), 0);
    }

    #[test]
    fn test_split_clamps_workers() {
        assert_eq!(split(5, 0), split(5, 1));
        assert_eq!(split(5, -8), split(5, 1));
    }

    #[test]
    fn test_split_huge() {
        let plan = split(i64::MAX, 3);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.ranges()[2].end(), i64::MAX);
        assert_eq!(plan.total_len(), i64::MAX);
    }

    proptest!(
        #[test]
        fn test_split_covers(total in 0..100_000_i64, workers in 1..512_i64) {
            let plan = split(total, workers);

            prop_assert!(plan.len() as i64 <= workers);
            prop_assert_eq!(plan.total_len(), total);

            let mut next = 0;
            for range in &plan {
                prop_assert_eq!(range.start(), next);
                prop_assert!(!range.is_empty());
                next = range.end();
            }
            prop_assert_eq!(next, total);

            // All chunks have the same size but the last.
            if let Some((_, init)) = plan.ranges().split_last() {
                prop_assert!(init.iter().map(|r| r.len()).all_equal());
            }
        }
    );
}
