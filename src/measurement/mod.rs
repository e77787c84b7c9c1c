//! Streaming side of the measurement: edge detection and interval accumulation.
//!
//! This module provides:
//! - Level tracking with falling/rising edge detection over ordered samples
//! - Incremental accumulation of validated fall-to-fall intervals

mod accumulator;
mod detector;

pub use accumulator::IntervalAccumulator;
pub use detector::{EdgeDetector, EdgeDirection, Transition};
