//! Configuration for fall-interval measurement sessions.
//!
//! A session is configured with the set of metrics the host asked for and
//! the policy for rendering time metrics when no interval was observed.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A metric this measurer can report.
///
/// The wire names (`as_str`/`FromStr`) are the case-sensitive strings the
/// host uses at registration time and as keys in the output map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Number of falling edges observed.
    FallCount,
    /// Number of retained fall-to-fall intervals.
    FallIntervals,
    /// Shortest fall-to-fall interval in seconds.
    FallMin,
    /// Longest fall-to-fall interval in seconds.
    FallMax,
    /// Mean fall-to-fall interval in seconds.
    FallAvg,
    /// Sample standard deviation of the intervals in seconds.
    FallStd,
}

impl Metric {
    /// Every metric this measurer supports, in report order.
    pub const ALL: [Metric; 6] = [
        Metric::FallCount,
        Metric::FallIntervals,
        Metric::FallMin,
        Metric::FallMax,
        Metric::FallAvg,
        Metric::FallStd,
    ];

    /// The wire name of this metric.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::FallCount => "fallCount",
            Metric::FallIntervals => "fallIntervals",
            Metric::FallMin => "fallMin",
            Metric::FallMax => "fallMax",
            Metric::FallAvg => "fallAvg",
            Metric::FallStd => "fallStd",
        }
    }

    /// Whether this metric is derived from interval durations.
    ///
    /// Time-based metrics are undefined when no interval exists; the two
    /// counts are computable for any input.
    pub fn is_time_based(self) -> bool {
        matches!(
            self,
            Metric::FallMin | Metric::FallMax | Metric::FallAvg | Metric::FallStd
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a metric name is not one of the supported six.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized metric name {name:?}")]
pub struct ParseMetricError {
    /// The offending name.
    pub name: String,
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fallCount" => Ok(Metric::FallCount),
            "fallIntervals" => Ok(Metric::FallIntervals),
            "fallMin" => Ok(Metric::FallMin),
            "fallMax" => Ok(Metric::FallMax),
            "fallAvg" => Ok(Metric::FallAvg),
            "fallStd" => Ok(Metric::FallStd),
            _ => Err(ParseMetricError {
                name: s.to_string(),
            }),
        }
    }
}

/// How to render time-based metrics when no interval was observed.
///
/// Fixed per session at construction; sessions with different policies can
/// run side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyPolicy {
    /// Report each requested time metric as exactly `0.0`.
    Zero,

    /// Leave the time metrics out of the report entirely. Absence of the
    /// key is the signal for "not applicable", distinct from a measured
    /// zero.
    #[default]
    Omit,
}

/// Configuration for a [`FallIntervalMeasurer`](crate::FallIntervalMeasurer).
///
/// # Example
///
/// ```
/// use fallstat::{Config, EmptyPolicy, Metric};
///
/// let config = Config::new()
///     .metrics([Metric::FallAvg, Metric::FallCount])
///     .empty_policy(EmptyPolicy::Zero);
/// assert!(config.is_requested(Metric::FallAvg));
/// assert!(!config.is_requested(Metric::FallStd));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The metrics the host asked this session to report.
    pub requested: BTreeSet<Metric>,

    /// Rendering policy for time metrics over an empty interval set.
    pub empty_policy: EmptyPolicy,
}

impl Default for Config {
    /// All supported metrics, with the `Omit` empty policy.
    fn default() -> Self {
        Self {
            requested: Metric::ALL.into_iter().collect(),
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl Config {
    /// Create a configuration requesting every supported metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from host-supplied metric names.
    ///
    /// This is the registration boundary: the host hands over whatever
    /// names it has, and names that are not supported here are ignored
    /// (logged at debug level) rather than treated as errors.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requested = BTreeSet::new();
        for name in names {
            match name.as_ref().parse::<Metric>() {
                Ok(metric) => {
                    requested.insert(metric);
                }
                Err(_) => {
                    tracing::debug!(name = name.as_ref(), "ignoring unrecognized metric name");
                }
            }
        }
        Self {
            requested,
            empty_policy: EmptyPolicy::default(),
        }
    }

    /// Replace the requested metric set.
    pub fn metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.requested = metrics.into_iter().collect();
        self
    }

    /// Add one metric to the requested set.
    pub fn request(mut self, metric: Metric) -> Self {
        self.requested.insert(metric);
        self
    }

    /// Set the empty-dataset policy.
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Whether the host asked for `metric`.
    pub fn is_requested(&self, metric: Metric) -> bool {
        self.requested.contains(&metric)
    }
}
