//! Benchmark result data models
//!
//! Contains structures for storing and serializing benchmark results
//! and the timing metrics collected during a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::BenchmarkConfig;
use crate::util::units::{calculate_rate, format_duration, format_latency, format_rate};

/// Complete benchmark result containing configuration, metrics, and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Timestamp when the benchmark was executed
    pub timestamp: DateTime<Utc>,
    /// Configuration used for this benchmark
    pub config: BenchmarkConfig,
    /// Timing metrics collected during the benchmark
    pub metrics: SortMetrics,
}

/// Timing metrics collected during benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortMetrics {
    /// Number of elements in each sorted list
    pub list_size: usize,
    /// Number of lists sorted during the run
    pub num_repeat: usize,
    /// Total elapsed time across all sort calls
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
    /// Average time per sort call
    #[serde(with = "duration_serde")]
    pub avg_duration: Duration,
    /// Sort calls per second
    pub sorts_per_sec: f64,
}

impl BenchmarkResult {
    /// Create a new benchmark result stamped with the current time
    pub fn new(config: BenchmarkConfig, metrics: SortMetrics) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            metrics,
        }
    }

    /// Get a human-readable summary of the benchmark result
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {} elements x {} runs - {} total - {} avg - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.config.algorithm.description(),
            self.metrics.list_size,
            self.metrics.num_repeat,
            format_duration(self.metrics.elapsed),
            format_latency(self.metrics.avg_duration),
            format_rate(self.metrics.sorts_per_sec)
        )
    }
}

impl SortMetrics {
    /// Compute metrics from a run's elapsed time
    pub fn new(list_size: usize, num_repeat: usize, elapsed: Duration) -> Self {
        let avg_duration = if num_repeat > 0 {
            elapsed.div_f64(num_repeat as f64)
        } else {
            Duration::ZERO
        };

        let sorts_per_sec = calculate_rate(num_repeat as u64, elapsed);

        Self {
            list_size,
            num_repeat,
            elapsed,
            avg_duration,
            sorts_per_sec,
        }
    }
}

impl Default for SortMetrics {
    fn default() -> Self {
        Self {
            list_size: 0,
            num_repeat: 0,
            elapsed: Duration::default(),
            avg_duration: Duration::default(),
            sorts_per_sec: 0.0,
        }
    }
}

// Custom serde module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_nanos().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u128::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos as u64))
    }
}
