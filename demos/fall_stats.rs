//! Feed a small captured window through a measurement session and print the
//! report in both output formats.
//!
//! Run with `cargo run --example fall_stats`.

use fallstat::output::{format_report, to_json_pretty};
use fallstat::{Config, EmptyPolicy, FallIntervalMeasurer, Level, RangeMeasurer, Sample};

fn main() {
    let config = Config::from_names(["fallCount", "fallIntervals", "fallMin", "fallMax", "fallAvg", "fallStd"])
        .empty_policy(EmptyPolicy::Omit);
    let mut measurer = FallIntervalMeasurer::new(config);

    // A capture window: the first sample is the baseline level, each later
    // sample reports the level after a transition.
    measurer.process_chunk(&[
        Sample::new(0.000, Level::High),
        Sample::new(0.010, Level::Low),
        Sample::new(0.015, Level::High),
        Sample::new(0.030, Level::Low),
        Sample::new(0.041, Level::High),
    ]);
    // Later chunk from the same capture.
    measurer.process_chunk(&[
        Sample::new(0.052, Level::Low),
        Sample::new(0.060, Level::High),
    ]);

    let report = measurer.measure();
    print!("{}", format_report(&report));

    match to_json_pretty(&report) {
        Ok(json) => println!("\n{json}"),
        Err(err) => eprintln!("failed to serialize report: {err}"),
    }
}
