//! Assembled measurement results.
//!
//! A [`Report`] holds only the metrics that were requested *and* applicable:
//! the two counts are always applicable, while the four time-based metrics
//! exist only when at least one interval was retained (or when the `Zero`
//! empty policy fills them in). A key that is absent means "not applicable",
//! which is deliberately distinct from a key whose value is zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{Config, EmptyPolicy, Metric};
use crate::statistics::IntervalStats;

/// Value of a single reported metric.
///
/// Counts are integers on the wire; durations are floating-point seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// An event or interval count.
    Count(u64),
    /// A duration in seconds.
    Duration(f64),
}

impl MetricValue {
    /// The value as a plain number, losing the count/duration distinction.
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Duration(s) => s,
        }
    }

    /// The value as a count, if it is one.
    pub fn as_count(self) -> Option<u64> {
        match self {
            MetricValue::Count(n) => Some(n),
            MetricValue::Duration(_) => None,
        }
    }

    /// The value as a duration in seconds, if it is one.
    pub fn as_duration(self) -> Option<f64> {
        match self {
            MetricValue::Duration(s) => Some(s),
            MetricValue::Count(_) => None,
        }
    }
}

/// The finalized result map of a measurement session.
///
/// Serializes to a flat object keyed by the metric wire names, e.g.
/// `{"fallCount":3,"fallIntervals":2,"fallAvg":3.0}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    values: BTreeMap<Metric, MetricValue>,
}

impl Report {
    /// Look up a metric.
    pub fn get(&self, metric: Metric) -> Option<MetricValue> {
        self.values.get(&metric).copied()
    }

    /// Whether the report carries a value for `metric`.
    pub fn contains(&self, metric: Metric) -> bool {
        self.values.contains_key(&metric)
    }

    /// Number of populated metrics.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no metric was populated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the populated metrics in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        self.values.iter().map(|(&metric, &value)| (metric, value))
    }
}

/// Assemble the report for a finished (or in-flight) session.
///
/// Applies the requested-metric filter and the empty-dataset policy:
/// - `fallCount` and `fallIntervals` are included whenever requested,
///   whatever the interval count.
/// - With at least one interval, each requested time metric carries its
///   computed value.
/// - With none, the time metrics are zero-filled under
///   [`EmptyPolicy::Zero`] and left out under [`EmptyPolicy::Omit`].
///
/// Metrics the host never requested are never populated.
pub fn assemble(config: &Config, fall_count: u64, intervals: &[f64]) -> Report {
    let mut values = BTreeMap::new();

    if config.is_requested(Metric::FallCount) {
        values.insert(Metric::FallCount, MetricValue::Count(fall_count));
    }
    if config.is_requested(Metric::FallIntervals) {
        values.insert(
            Metric::FallIntervals,
            MetricValue::Count(intervals.len() as u64),
        );
    }

    match IntervalStats::compute(intervals) {
        Some(stats) => {
            for metric in Metric::ALL.into_iter().filter(|m| m.is_time_based()) {
                if config.is_requested(metric) {
                    values.insert(metric, MetricValue::Duration(time_value(metric, &stats)));
                }
            }
        }
        None => {
            if config.empty_policy == EmptyPolicy::Zero {
                for metric in Metric::ALL.into_iter().filter(|m| m.is_time_based()) {
                    if config.is_requested(metric) {
                        values.insert(metric, MetricValue::Duration(0.0));
                    }
                }
            }
            // Omit: absence of the keys is the result.
        }
    }

    Report { values }
}

fn time_value(metric: Metric, stats: &IntervalStats) -> f64 {
    match metric {
        Metric::FallMin => stats.min,
        Metric::FallMax => stats.max,
        Metric::FallAvg => stats.mean,
        Metric::FallStd => stats.std_dev,
        Metric::FallCount | Metric::FallIntervals => {
            unreachable!("counts are not time-based metrics")
        }
    }
}
