use std::fmt;

/// A half-open interval `[start, end)` of integers.
///
/// A range is one unit of work: it is summed by exactly one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Create the range `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: i64, end: i64) -> Range {
        assert!(start <= end, "invalid range [{start}, {end})");
        Range { start, end }
    }

    pub fn start(self) -> i64 {
        self.start
    }

    pub fn end(self) -> i64 {
        self.end
    }

    /// Number of integers in the range.
    pub fn len(self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Sum of all integers in the range, computed with the given method.
    pub fn sum(self, method: SumMethod) -> i128 {
        match method {
            SumMethod::Iterative => (self.start..self.end).map(i128::from).sum(),
            SumMethod::ClosedForm => {
                let start = i128::from(self.start);
                let end = i128::from(self.end);
                // One of (end - start) and (start + end - 1) is always even.
                (start + end - 1) * (end - start) / 2
            }
        }
    }
}

impl From<Range> for (i64, i64) {
    fn from(range: Range) -> (i64, i64) {
        (range.start, range.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// How a worker computes the sum of its range.
///
/// Both methods yield the same value for every range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SumMethod {
    /// Add every integer of the range one by one.
    Iterative,

    /// Use the arithmetic series formula.
    #[default]
    ClosedForm,
}

impl std::str::FromStr for SumMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<SumMethod, String> {
        match s {
            "iter" | "iterative" => Ok(SumMethod::Iterative),
            "closed" | "closed-form" => Ok(SumMethod::ClosedForm),
            _ => Err(format!("unknown sum method {s:?}, expected \"iter\" or \"closed\"")),
        }
    }
}
