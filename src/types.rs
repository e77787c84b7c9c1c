//! Sample vocabulary: signal levels, host timestamps, and level-transition samples.

use serde::{Deserialize, Serialize};

/// Logic level of a two-level signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Signal at the low level.
    Low,
    /// Signal at the high level.
    High,
}

impl Level {
    /// Whether this is the low level.
    pub fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }

    /// Whether this is the high level.
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    /// Convert a host bitstate to a level (`true` is High).
    fn from(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Host-supplied time marker for a sample.
///
/// Capture hosts deliver time in different representations: some report
/// plain fractional seconds, others report counts of a fixed-rate tick
/// counter. Both support subtraction and conversion to seconds, but the
/// conversion can fail (non-finite seconds, a tick clock with no declared
/// rate), so it is exposed as an explicit fallible operation rather than a
/// blanket coercion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Timestamp {
    /// Fractional seconds since the start of the capture.
    Seconds(f64),

    /// Ticks of a fixed-rate counter.
    Ticks {
        /// Tick count since the start of the capture.
        count: u64,
        /// Ticks per second (Hz). A zero rate makes the timestamp
        /// unconvertible.
        frequency_hz: u64,
    },
}

impl Timestamp {
    /// Create a tick timestamp from a counter running at `freq_hz` Hz.
    pub fn ticks_hz(count: u64, freq_hz: u64) -> Self {
        Timestamp::Ticks {
            count,
            frequency_hz: freq_hz,
        }
    }

    /// Create a tick timestamp from a counter running at `freq_mhz` MHz.
    pub fn ticks_mhz(count: u64, freq_mhz: u64) -> Self {
        Timestamp::Ticks {
            count,
            frequency_hz: freq_mhz * 1_000_000,
        }
    }

    /// Convert to plain seconds.
    ///
    /// Returns `None` when the representation has no usable seconds value:
    /// a non-finite `Seconds` marker, or a `Ticks` marker with a zero rate.
    pub fn as_seconds(&self) -> Option<f64> {
        match *self {
            Timestamp::Seconds(s) => s.is_finite().then_some(s),
            Timestamp::Ticks {
                count,
                frequency_hz,
            } => {
                if frequency_hz == 0 {
                    None
                } else {
                    Some(count as f64 / frequency_hz as f64)
                }
            }
        }
    }

    /// Elapsed seconds from `earlier` to `self`.
    ///
    /// Returns `None` if either endpoint fails conversion or the difference
    /// is not finite. The result may be negative; callers decide whether a
    /// negative elapsed time is meaningful.
    pub fn seconds_since(&self, earlier: &Timestamp) -> Option<f64> {
        let delta = self.as_seconds()? - earlier.as_seconds()?;
        delta.is_finite().then_some(delta)
    }
}

impl From<f64> for Timestamp {
    fn from(seconds: f64) -> Self {
        Timestamp::Seconds(seconds)
    }
}

/// One level-transition sample from the capture host.
///
/// A capture window arrives as an ordered sequence of samples: the first
/// establishes the starting level, each later one reports the level after a
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the level was observed.
    pub time: Timestamp,
    /// The level at (and after) `time`.
    pub level: Level,
}

impl Sample {
    /// Create a sample.
    pub fn new(time: impl Into<Timestamp>, level: impl Into<Level>) -> Self {
        Self {
            time: time.into(),
            level: level.into(),
        }
    }
}
