//! Falling/rising edge detection over an ordered sample stream.

use crate::types::{Level, Sample, Timestamp};

/// Direction of a detected level transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Low-to-high transition.
    Rising,
    /// High-to-low transition.
    Falling,
}

/// A level transition identified in the sample stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Timestamp of the sample that carried the new level.
    pub at: Timestamp,
    /// Which way the signal moved.
    pub direction: EdgeDirection,
}

/// Tracks the signal level across samples and reports transitions.
///
/// The detector has two states: before the first sample it knows nothing
/// about the signal; the first sample it sees establishes the starting level
/// and is never itself a transition. From then on, every sample whose level
/// differs from the recorded one yields a [`Transition`], and the recorded
/// level follows the stream whether the edge was rising or falling.
///
/// The detector never terminates on its own; a session ends when the caller
/// stops feeding samples.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    prev_level: Option<Level>,
}

impl EdgeDetector {
    /// Create a detector that has seen no samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next sample, returning the transition it completes, if any.
    ///
    /// Returns `None` for the baseline sample and for samples that repeat
    /// the current level.
    pub fn offer(&mut self, sample: &Sample) -> Option<Transition> {
        match self.prev_level {
            None => {
                // Baseline marker: establishes the starting level only.
                self.prev_level = Some(sample.level);
                None
            }
            Some(prev) if prev != sample.level => {
                self.prev_level = Some(sample.level);
                let direction = if sample.level.is_low() {
                    EdgeDirection::Falling
                } else {
                    EdgeDirection::Rising
                };
                Some(Transition {
                    at: sample.time,
                    direction,
                })
            }
            Some(_) => None,
        }
    }

    /// The last recorded level, or `None` before the baseline sample.
    pub fn current_level(&self) -> Option<Level> {
        self.prev_level
    }

    /// Whether the baseline sample has been seen.
    pub fn is_tracking(&self) -> bool {
        self.prev_level.is_some()
    }
}
