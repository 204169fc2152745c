//! Units formatting and conversion utilities
//!
//! Provides functions for human-readable formatting of durations,
//! per-sort latencies, and sort rates.

use std::time::Duration;

/// Format duration into human-readable string
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use sorb::util::units::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 3600 {
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if total_secs >= 60 {
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{}m {}s", minutes, seconds)
    } else if total_secs > 0 {
        if millis > 0 {
            format!("{}.{:02}s", total_secs, millis / 10)
        } else {
            format!("{}s", total_secs)
        }
    } else {
        format!("{}ms", millis)
    }
}

/// Format a per-sort latency with appropriate precision
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use sorb::util::units::format_latency;
///
/// assert_eq!(format_latency(Duration::from_millis(5)), "5.00ms");
/// assert_eq!(format_latency(Duration::from_micros(500)), "500μs");
/// ```
pub fn format_latency(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros >= 1000 {
        let millis = micros as f64 / 1000.0;
        format!("{:.2}ms", millis)
    } else {
        format!("{}μs", micros)
    }
}

/// Calculate operations per second from a count and a duration
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use sorb::util::units::calculate_rate;
///
/// let rate = calculate_rate(1000, Duration::from_secs(1));
/// assert!((rate - 1000.0).abs() < 0.01);
/// ```
pub fn calculate_rate(operations: u64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }

    let duration_secs = duration.as_secs_f64();
    operations as f64 / duration_secs
}

/// Format a sort rate with appropriate units
///
/// # Examples
/// ```
/// use sorb::util::units::format_rate;
///
/// assert_eq!(format_rate(1500.0), "1.5K sorts/s");
/// assert_eq!(format_rate(2500000.0), "2.5M sorts/s");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate >= 1_000_000.0 {
        format!("{:.1}M sorts/s", rate / 1_000_000.0)
    } else if rate >= 1_000.0 {
        format!("{:.1}K sorts/s", rate / 1_000.0)
    } else {
        format!("{:.0} sorts/s", rate)
    }
}
