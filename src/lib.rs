//! # fallstat
//!
//! Fall-to-fall interval statistics for captured digital waveforms.
//!
//! Given the ordered level-transition samples of one captured window, this
//! crate reports how often the signal falls and the distribution of the gaps
//! between consecutive falls: count, interval count, min, max, mean, and
//! sample standard deviation.
//!
//! The host drives a session through two operations: push the capture as one
//! or more ordered sample chunks, then read the result. The result map is
//! sparse on purpose — a time metric that is absent means "not applicable"
//! (no interval existed and the session was configured to omit), which is a
//! different statement than a measured `0.0`.
//!
//! ## Input assumptions
//!
//! The sample stream is assumed cleaned and ordered by non-decreasing
//! timestamp; nothing here re-sorts, de-duplicates, or debounces. A sample
//! whose timestamp steps backwards costs the intervals it touches, never the
//! session.
//!
//! ## Quick Start
//!
//! ```
//! use fallstat::{Config, FallIntervalMeasurer, Level, Metric, RangeMeasurer, Sample};
//!
//! let config = Config::from_names(["fallCount", "fallAvg", "fallStd"]);
//! let mut measurer = FallIntervalMeasurer::new(config);
//!
//! measurer.process_chunk(&[
//!     Sample::new(0.0, Level::High),
//!     Sample::new(1.0, Level::Low),
//!     Sample::new(2.0, Level::High),
//!     Sample::new(3.0, Level::Low),
//!     Sample::new(5.0, Level::High),
//!     Sample::new(7.0, Level::Low),
//! ]);
//!
//! let report = measurer.measure();
//! assert_eq!(report.get(Metric::FallCount).unwrap().as_count(), Some(3));
//! assert_eq!(report.get(Metric::FallAvg).unwrap().as_duration(), Some(3.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod measurer;
mod report;
mod types;

// Functional modules
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, EmptyPolicy, Metric, ParseMetricError};
pub use measurer::{FallIntervalMeasurer, RangeMeasurer};
pub use report::{assemble, MetricValue, Report};
pub use types::{Level, Sample, Timestamp};
