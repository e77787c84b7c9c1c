//! End-to-end tests for the fall-interval measurement session.
//!
//! Exercises the public API the way a capture host would: chunked sample
//! delivery followed by one (or more) finalize calls. Covers full capture
//! scenarios, the empty-dataset policy matrix, out-of-order timestamps, and
//! tick-based time representations.

use fallstat::{
    Config, EmptyPolicy, FallIntervalMeasurer, Level, Metric, RangeMeasurer, Sample, Timestamp,
};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

const TOL: f64 = 1e-9;

fn samples(pairs: &[(f64, Level)]) -> Vec<Sample> {
    pairs
        .iter()
        .map(|&(t, level)| Sample::new(t, level))
        .collect()
}

fn duration(report: &fallstat::Report, metric: Metric) -> f64 {
    report
        .get(metric)
        .unwrap_or_else(|| panic!("{metric} missing from report"))
        .as_duration()
        .unwrap_or_else(|| panic!("{metric} is not a duration"))
}

fn count(report: &fallstat::Report, metric: Metric) -> u64 {
    report
        .get(metric)
        .unwrap_or_else(|| panic!("{metric} missing from report"))
        .as_count()
        .unwrap_or_else(|| panic!("{metric} is not a count"))
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn three_falls_full_metric_set() {
    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&samples(&[
        (0.0, Level::High),
        (1.0, Level::Low),
        (2.0, Level::High),
        (3.0, Level::Low),
        (5.0, Level::High),
        (7.0, Level::Low),
    ]));

    let report = measurer.measure();
    assert_eq!(count(&report, Metric::FallCount), 3);
    assert_eq!(count(&report, Metric::FallIntervals), 2);
    assert!((duration(&report, Metric::FallMin) - 2.0).abs() < TOL);
    assert!((duration(&report, Metric::FallMax) - 4.0).abs() < TOL);
    assert!((duration(&report, Metric::FallAvg) - 3.0).abs() < TOL);
    assert!((duration(&report, Metric::FallStd) - 1.414_213_562_4).abs() < TOL);
}

#[test]
fn seed_only_capture_with_omit_policy() {
    let config = Config::new().empty_policy(EmptyPolicy::Omit);
    let mut measurer = FallIntervalMeasurer::new(config);
    measurer.process_chunk(&samples(&[(0.0, Level::High)]));

    let report = measurer.measure();
    assert_eq!(report.len(), 2);
    assert_eq!(count(&report, Metric::FallCount), 0);
    assert_eq!(count(&report, Metric::FallIntervals), 0);
    for metric in [
        Metric::FallMin,
        Metric::FallMax,
        Metric::FallAvg,
        Metric::FallStd,
    ] {
        assert!(!report.contains(metric), "{metric} should be omitted");
    }
}

#[test]
fn seed_only_capture_with_zero_policy() {
    let config = Config::new().empty_policy(EmptyPolicy::Zero);
    let mut measurer = FallIntervalMeasurer::new(config);
    measurer.process_chunk(&samples(&[(0.0, Level::High)]));

    let report = measurer.measure();
    assert_eq!(report.len(), 6);
    assert_eq!(count(&report, Metric::FallCount), 0);
    assert_eq!(count(&report, Metric::FallIntervals), 0);
    for metric in [
        Metric::FallMin,
        Metric::FallMax,
        Metric::FallAvg,
        Metric::FallStd,
    ] {
        assert_eq!(duration(&report, metric), 0.0);
    }
}

#[test]
fn single_fall_has_no_interval_to_pair() {
    let config = Config::new().empty_policy(EmptyPolicy::Omit);
    let mut measurer = FallIntervalMeasurer::new(config);
    measurer.process_chunk(&samples(&[(0.0, Level::High), (5.0, Level::Low)]));

    let report = measurer.measure();
    assert_eq!(count(&report, Metric::FallCount), 1);
    assert_eq!(count(&report, Metric::FallIntervals), 0);
    // One fall was recorded, but the time metrics still follow the
    // empty-dataset policy: no interval, no distribution.
    assert!(!report.contains(Metric::FallAvg));
}

#[test]
fn backwards_step_across_chunks_drops_one_interval() {
    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&samples(&[
        (0.0, Level::High),
        (4.0, Level::Low),
        (5.0, Level::High),
    ]));
    // Second chunk's leading fall is earlier than the previous fall.
    measurer.process_chunk(&samples(&[
        (3.0, Level::Low),
        (6.0, Level::High),
        (8.0, Level::Low),
    ]));

    let report = measurer.measure();
    // The 3.0 - 4.0 delta is discarded; the fall itself still counts and
    // re-bases the next interval (8.0 - 3.0 = 5.0).
    assert_eq!(count(&report, Metric::FallCount), 3);
    assert_eq!(count(&report, Metric::FallIntervals), 1);
    assert!((duration(&report, Metric::FallMin) - 5.0).abs() < TOL);
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn chunk_boundaries_do_not_change_the_result() {
    let all = [
        (0.0, Level::High),
        (1.0, Level::Low),
        (2.0, Level::High),
        (3.0, Level::Low),
        (5.0, Level::High),
        (7.0, Level::Low),
    ];

    let mut whole = FallIntervalMeasurer::new(Config::new());
    whole.process_chunk(&samples(&all));

    // Same capture delivered one sample at a time.
    let mut pieces = FallIntervalMeasurer::new(Config::new());
    for pair in all {
        pieces.process_chunk(&samples(&[pair]));
    }

    assert_eq!(whole.measure(), pieces.measure());
}

#[test]
fn finalize_twice_is_identical() {
    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&samples(&[
        (0.0, Level::High),
        (0.25, Level::Low),
        (0.5, Level::High),
        (0.875, Level::Low),
    ]));

    assert_eq!(measurer.measure(), measurer.measure());
}

#[test]
fn leading_empty_chunk_leaves_detector_uninitialized() {
    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&[]);

    // The first *sample* is still the baseline: the low level here must not
    // be read as a falling edge.
    measurer.process_chunk(&samples(&[(0.0, Level::Low)]));
    let report = measurer.measure();
    assert_eq!(count(&report, Metric::FallCount), 0);
}

#[test]
fn sessions_with_different_policies_coexist() {
    let mut omit =
        FallIntervalMeasurer::new(Config::new().empty_policy(EmptyPolicy::Omit));
    let mut zero =
        FallIntervalMeasurer::new(Config::new().empty_policy(EmptyPolicy::Zero));

    let chunk = samples(&[(0.0, Level::High)]);
    omit.process_chunk(&chunk);
    zero.process_chunk(&chunk);

    assert_eq!(omit.measure().len(), 2);
    assert_eq!(zero.measure().len(), 6);
}

// ============================================================================
// Host time representations
// ============================================================================

#[test]
fn tick_timestamps_measure_like_seconds() {
    // 10 kHz tick counter: 10_000 ticks per second.
    let ticks = |count| Timestamp::ticks_hz(count, 10_000);

    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&[
        Sample::new(ticks(0), Level::High),
        Sample::new(ticks(10_000), Level::Low),
        Sample::new(ticks(20_000), Level::High),
        Sample::new(ticks(30_000), Level::Low),
        Sample::new(ticks(50_000), Level::High),
        Sample::new(ticks(70_000), Level::Low),
    ]);

    let report = measurer.measure();
    assert_eq!(count(&report, Metric::FallCount), 3);
    assert!((duration(&report, Metric::FallMin) - 2.0).abs() < TOL);
    assert!((duration(&report, Metric::FallMax) - 4.0).abs() < TOL);
}

#[test]
fn unconvertible_timestamp_never_aborts_the_session() {
    let mut measurer = FallIntervalMeasurer::new(Config::new());
    measurer.process_chunk(&[
        Sample::new(Timestamp::Seconds(0.0), Level::High),
        Sample::new(Timestamp::Seconds(1.0), Level::Low),
        Sample::new(Timestamp::Seconds(2.0), Level::High),
        // A tick marker with no declared rate cannot convert to seconds.
        Sample::new(Timestamp::ticks_hz(42, 0), Level::Low),
        Sample::new(Timestamp::Seconds(4.0), Level::High),
        Sample::new(Timestamp::Seconds(5.0), Level::Low),
        Sample::new(Timestamp::Seconds(6.0), Level::High),
        Sample::new(Timestamp::Seconds(9.0), Level::Low),
    ]);

    let report = measurer.measure();
    // Every fall counts; only the deltas touching the bad marker are lost.
    assert_eq!(count(&report, Metric::FallCount), 4);
    assert_eq!(count(&report, Metric::FallIntervals), 1);
    assert!((duration(&report, Metric::FallAvg) - 4.0).abs() < TOL);
}

// ============================================================================
// Randomized pulse trains
// ============================================================================

#[test]
fn random_pulse_train_matches_reference_computation() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);

    for _ in 0..20 {
        // Build an alternating High/Low train with random gaps.
        let pulses = rng.random_range(2..200);
        let mut t = 0.0;
        let mut pairs = vec![(t, Level::High)];
        for _ in 0..pulses {
            t += rng.random_range(1e-4..5e-2);
            pairs.push((t, Level::Low));
            t += rng.random_range(1e-4..5e-2);
            pairs.push((t, Level::High));
        }

        // Reference: every Low sample after the seed is a fall.
        let fall_times: Vec<f64> = pairs
            .iter()
            .skip(1)
            .filter(|(_, level)| level.is_low())
            .map(|&(t, _)| t)
            .collect();
        let ref_intervals: Vec<f64> =
            fall_times.windows(2).map(|w| w[1] - w[0]).collect();
        let ref_mean: f64 =
            ref_intervals.iter().sum::<f64>() / ref_intervals.len() as f64;

        // Deliver in random chunk sizes.
        let mut measurer = FallIntervalMeasurer::new(Config::new());
        let all = samples(&pairs);
        let mut rest = all.as_slice();
        while !rest.is_empty() {
            let take = rng.random_range(1..=rest.len());
            let (chunk, tail) = rest.split_at(take);
            measurer.process_chunk(chunk);
            rest = tail;
        }

        let report = measurer.measure();
        assert_eq!(count(&report, Metric::FallCount), fall_times.len() as u64);
        assert_eq!(
            count(&report, Metric::FallIntervals),
            ref_intervals.len() as u64
        );
        assert!((duration(&report, Metric::FallAvg) - ref_mean).abs() < 1e-9);
    }
}
