//! Measurement session: the `RangeMeasurer` capability and its
//! falling-edge implementation.

use crate::config::Config;
use crate::measurement::{EdgeDetector, EdgeDirection, IntervalAccumulator};
use crate::report::{assemble, Report};
use crate::types::Sample;

/// A measurement over a captured range of a digital signal.
///
/// The host drives a session through exactly two operations: it pushes the
/// captured window as one or more ordered sample chunks, then reads the
/// finalized result. Implementations own their state for the lifetime of
/// one session; the host creates one per analysis window and discards it
/// afterwards.
pub trait RangeMeasurer {
    /// Consume the next chunk of ordered samples.
    ///
    /// State carries over between calls; an empty chunk is a no-op.
    fn process_chunk(&mut self, samples: &[Sample]);

    /// Produce the result map for everything processed so far.
    ///
    /// Must be idempotent and side-effect free: calling it twice with no
    /// intervening chunk returns identical reports.
    fn measure(&self) -> Report;
}

/// Fall-to-fall interval measurement over a captured range.
///
/// Wires the edge detector into the interval accumulator and assembles the
/// configured subset of metrics on [`measure`](RangeMeasurer::measure).
///
/// # Example
///
/// ```
/// use fallstat::{Config, FallIntervalMeasurer, Level, Metric, RangeMeasurer, Sample};
///
/// let mut measurer = FallIntervalMeasurer::new(Config::new());
/// measurer.process_chunk(&[
///     Sample::new(0.0, Level::High),
///     Sample::new(1.0, Level::Low),
///     Sample::new(2.0, Level::High),
///     Sample::new(3.0, Level::Low),
/// ]);
///
/// let report = measurer.measure();
/// assert_eq!(report.get(Metric::FallCount).unwrap().as_count(), Some(2));
/// assert_eq!(report.get(Metric::FallAvg).unwrap().as_duration(), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct FallIntervalMeasurer {
    config: Config,
    detector: EdgeDetector,
    accumulator: IntervalAccumulator,
}

impl FallIntervalMeasurer {
    /// Create a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            detector: EdgeDetector::new(),
            accumulator: IntervalAccumulator::new(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of falling edges seen so far.
    pub fn fall_count(&self) -> u64 {
        self.accumulator.fall_count()
    }

    /// The retained intervals in seconds, in arrival order.
    pub fn intervals(&self) -> &[f64] {
        self.accumulator.intervals()
    }
}

impl RangeMeasurer for FallIntervalMeasurer {
    fn process_chunk(&mut self, samples: &[Sample]) {
        for sample in samples {
            if let Some(transition) = self.detector.offer(sample) {
                if transition.direction == EdgeDirection::Falling {
                    self.accumulator.record_fall(transition.at);
                }
            }
        }
    }

    fn measure(&self) -> Report {
        assemble(
            &self.config,
            self.accumulator.fall_count(),
            self.accumulator.intervals(),
        )
    }
}

impl Default for FallIntervalMeasurer {
    /// A session requesting every metric with the default empty policy.
    fn default() -> Self {
        Self::new(Config::default())
    }
}
