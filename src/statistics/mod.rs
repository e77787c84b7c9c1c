//! Descriptive statistics over retained interval durations.
//!
//! The reduction here is a pure function of the interval slice: calling it
//! any number of times over unchanged input yields identical results, which
//! is what makes finalization idempotent.

/// Descriptive statistics of a non-empty interval set.
///
/// Produced by [`IntervalStats::compute`]; an empty input has no statistics
/// at all rather than zero-valued ones, so the constructor returns `Option`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalStats {
    /// Number of intervals the statistics summarize.
    pub count: usize,
    /// Shortest interval in seconds.
    pub min: f64,
    /// Longest interval in seconds.
    pub max: f64,
    /// Arithmetic mean in seconds.
    pub mean: f64,
    /// Sample standard deviation in seconds.
    ///
    /// Uses Bessel's correction (the `n - 1` denominator): the intervals are
    /// a sample of the signal's behavior, not the whole population. A single
    /// interval is underdetermined and reports exactly `0.0` by convention.
    pub std_dev: f64,
}

impl IntervalStats {
    /// Reduce an interval slice to its descriptive statistics.
    ///
    /// Returns `None` for an empty slice. Never panics and never produces
    /// NaN for the inputs the accumulator retains (finite, non-negative).
    pub fn compute(intervals: &[f64]) -> Option<Self> {
        if intervals.is_empty() {
            return None;
        }

        let n = intervals.len();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &x in intervals {
            min = min.min(x);
            max = max.max(x);
            sum += x;
        }
        let mean = sum / n as f64;

        let std_dev = if n == 1 {
            0.0
        } else {
            let sum_sq: f64 = intervals.iter().map(|&x| (x - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        };

        Some(Self {
            count: n,
            min,
            max,
            mean,
            std_dev,
        })
    }

    /// Sample variance in seconds squared.
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}
