//! Incremental accumulation of fall-to-fall interval durations.

use crate::types::Timestamp;

/// Accumulates fall events into interval durations.
///
/// Every fall increments the fall count. Every fall after the first also
/// yields a candidate interval: the elapsed seconds since the previous fall.
/// A candidate that cannot be converted to seconds, or that comes out
/// negative (the host clock stepped backwards across a chunk boundary), is
/// dropped and the session continues — one bad timestamp costs exactly one
/// interval, never the measurement.
///
/// Retained intervals grow linearly with the fall count. That is fine for
/// the bounded capture windows a host hands over; feeding an unbounded
/// stream through one accumulator will grow memory without limit.
///
/// Invariants: `intervals().len() <= fall_count() - 1` whenever
/// `fall_count() > 0`, with equality iff no candidate was dropped, and no
/// retained interval is negative or non-finite.
#[derive(Debug, Clone, Default)]
pub struct IntervalAccumulator {
    last_fall: Option<Timestamp>,
    intervals: Vec<f64>,
    fall_count: u64,
}

impl IntervalAccumulator {
    /// Create an accumulator that has seen no falls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fall event at `at`.
    ///
    /// The previous fall time always advances to `at`, even when the
    /// candidate interval is dropped, so the next interval is measured from
    /// the most recent fall actually observed.
    pub fn record_fall(&mut self, at: Timestamp) {
        self.fall_count += 1;

        if let Some(prev) = self.last_fall {
            match at.seconds_since(&prev) {
                Some(delta) if delta >= 0.0 => self.intervals.push(delta),
                Some(delta) => {
                    tracing::debug!(delta, "dropping negative fall interval");
                }
                None => {
                    tracing::debug!("dropping fall interval with unconvertible timestamps");
                }
            }
        }

        self.last_fall = Some(at);
    }

    /// Number of falling edges recorded so far.
    pub fn fall_count(&self) -> u64 {
        self.fall_count
    }

    /// The retained interval durations in seconds, in arrival order.
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Timestamp of the most recent fall, if any.
    pub fn last_fall(&self) -> Option<Timestamp> {
        self.last_fall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fall_yields_no_interval() {
        let mut acc = IntervalAccumulator::new();
        acc.record_fall(Timestamp::Seconds(5.0));

        assert_eq!(acc.fall_count(), 1);
        assert!(acc.intervals().is_empty());
        assert_eq!(acc.last_fall(), Some(Timestamp::Seconds(5.0)));
    }

    #[test]
    fn consecutive_falls_accumulate_deltas() {
        let mut acc = IntervalAccumulator::new();
        acc.record_fall(Timestamp::Seconds(1.0));
        acc.record_fall(Timestamp::Seconds(3.0));
        acc.record_fall(Timestamp::Seconds(7.0));

        assert_eq!(acc.fall_count(), 3);
        assert_eq!(acc.intervals(), &[2.0, 4.0]);
    }

    #[test]
    fn zero_width_interval_is_retained() {
        let mut acc = IntervalAccumulator::new();
        acc.record_fall(Timestamp::Seconds(2.0));
        acc.record_fall(Timestamp::Seconds(2.0));

        assert_eq!(acc.intervals(), &[0.0]);
    }

    #[test]
    fn negative_delta_is_dropped_but_state_advances() {
        let mut acc = IntervalAccumulator::new();
        acc.record_fall(Timestamp::Seconds(10.0));
        // Clock stepped backwards: candidate interval is -4 s.
        acc.record_fall(Timestamp::Seconds(6.0));

        assert_eq!(acc.fall_count(), 2);
        assert!(acc.intervals().is_empty());
        // Next interval measures from the new, earlier fall.
        assert_eq!(acc.last_fall(), Some(Timestamp::Seconds(6.0)));

        acc.record_fall(Timestamp::Seconds(9.0));
        assert_eq!(acc.intervals(), &[3.0]);
    }

    #[test]
    fn unconvertible_timestamp_costs_two_intervals_at_most() {
        let mut acc = IntervalAccumulator::new();
        acc.record_fall(Timestamp::Seconds(1.0));
        acc.record_fall(Timestamp::ticks_hz(50, 0)); // no declared rate
        acc.record_fall(Timestamp::Seconds(4.0));

        // Both deltas touching the bad timestamp are dropped; the count
        // still reflects every fall.
        assert_eq!(acc.fall_count(), 3);
        assert!(acc.intervals().is_empty());

        acc.record_fall(Timestamp::Seconds(6.0));
        assert_eq!(acc.intervals(), &[2.0]);
    }

    #[test]
    fn interval_count_never_exceeds_fall_count_minus_one() {
        let mut acc = IntervalAccumulator::new();
        let times = [1.0, 2.0, 1.5, 4.0, f64::NAN, 6.0];
        for t in times {
            acc.record_fall(Timestamp::Seconds(t));
            let falls = acc.fall_count();
            assert!(acc.intervals().len() as u64 <= falls.saturating_sub(1));
        }
    }
}
