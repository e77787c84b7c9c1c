//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::config::Metric;
use crate::report::{MetricValue, Report};

/// Format a `Report` for human-readable terminal output.
///
/// Counts come first, then the time-based metrics with adaptive units.
/// Time metrics the report does not carry are shown as a single dimmed
/// "n/a" line, mirroring how a host UI renders omitted keys.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(
        &"FALL-TO-FALL INTERVALS".cyan().bold().to_string(),
    ));
    output.push_str(&format_box_separator());

    if report.is_empty() {
        output.push_str(&format_box_line(&"(no metrics populated)".dimmed().to_string()));
        output.push_str(&format_box_bottom());
        return output;
    }

    // Counts
    if let Some(count) = report.get(Metric::FallCount).and_then(MetricValue::as_count) {
        output.push_str(&format_box_line(&format!("Falling edges: {count}")));
    }
    if let Some(count) = report
        .get(Metric::FallIntervals)
        .and_then(MetricValue::as_count)
    {
        output.push_str(&format_box_line(&format!("Intervals:     {count}")));
    }

    // Time-based metrics
    let time_rows: Vec<(Metric, f64)> = Metric::ALL
        .into_iter()
        .filter(|m| m.is_time_based())
        .filter_map(|m| {
            report
                .get(m)
                .and_then(MetricValue::as_duration)
                .map(|seconds| (m, seconds))
        })
        .collect();

    output.push_str(&format_box_separator());
    if time_rows.is_empty() {
        output.push_str(&format_box_line(
            &"Time metrics: n/a (no intervals)".dimmed().to_string(),
        ));
    } else {
        for (metric, seconds) in time_rows {
            let label = match metric {
                Metric::FallMin => "Min",
                Metric::FallMax => "Max",
                Metric::FallAvg => "Avg",
                Metric::FallStd => "Std",
                _ => unreachable!(),
            };
            output.push_str(&format_box_line(&format!(
                "{label}: {}",
                format_duration(seconds)
            )));
        }
    }

    output.push_str(&format_box_bottom());
    output
}

/// Format a duration in seconds with an adaptive unit.
fn format_duration(seconds: f64) -> String {
    let abs = seconds.abs();
    if seconds == 0.0 || abs >= 1.0 {
        format!("{seconds:.3} s")
    } else if abs >= 1e-3 {
        format!("{:.3} ms", seconds * 1e3)
    } else if abs >= 1e-6 {
        format!("{:.3} \u{00B5}s", seconds * 1e6)
    } else {
        format!("{:.1} ns", seconds * 1e9)
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 40;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
