//! Benchmark runner
//!
//! Times a sorting strategy over a generated workload and aggregates
//! the elapsed time into a result record.

use std::time::Instant;

use tracing::{debug, info};

use crate::bench::workload::Workload;
use crate::config::BenchmarkConfig;
use crate::models::{BenchmarkResult, SortMetrics};
use crate::sort;
use crate::{Result, SorbError};

/// Benchmark executor for a validated configuration
pub struct SortBenchmark {
    config: BenchmarkConfig,
}

impl SortBenchmark {
    /// Create a new benchmark executor
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this benchmark runs with
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Execute the benchmark.
    ///
    /// Generates the seeded workload, sorts every sequence in order
    /// with the selected strategy while timing the whole loop on a
    /// monotonic clock, and returns the aggregated result. The sorted
    /// output is verified outside the timed section; a strategy that
    /// fails to sort is reported as a benchmark error.
    pub fn run(&self) -> Result<BenchmarkResult> {
        let strategy = sort::strategy_for(self.config.algorithm);
        let list_size = self.config.list_size();
        let num_repeat = self.config.num_repeat;

        debug!(
            "generating workload: {} sequences of {} elements (seed {})",
            num_repeat, list_size, self.config.seed
        );
        let mut workload = Workload::generate(list_size, num_repeat, self.config.seed);

        let start = Instant::now();
        for sequence in workload.sequences_mut() {
            strategy.sort(sequence);
        }
        let elapsed = start.elapsed();

        for sequence in workload.sequences() {
            if !is_sorted(sequence) {
                return Err(SorbError::BenchmarkError(format!(
                    "{} left a sequence unsorted",
                    strategy.name()
                )));
            }
        }

        let metrics = SortMetrics::new(list_size, num_repeat, elapsed);
        let result = BenchmarkResult::new(self.config.clone(), metrics);
        info!("{}", result.summary());

        Ok(result)
    }
}

fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
