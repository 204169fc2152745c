//! Configuration management module
//!
//! Handles loading, saving, and validation of benchmark parameters:
//! the selected sorting algorithm, the workload size and repeat count,
//! and the seed for workload generation.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, SorbError, APP_NAME, CONFIG_FILE};

/// Largest accepted list size exponent (4^12 is ~16.7M elements)
pub const MAX_LIST_SIZE_EXP: u32 = 12;
/// Largest accepted repeat count
pub const MAX_NUM_REPEAT: usize = 100_000;
/// Cap on total workload memory (1 GiB of i64 elements)
pub const MAX_WORKLOAD_BYTES: u64 = 1024 * 1024 * 1024;

/// Benchmark configuration containing all run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Sorting algorithm to benchmark
    pub algorithm: SortAlgorithm,
    /// List size exponent; the actual list size is 4^list_size_exp
    pub list_size_exp: u32,
    /// Number of shuffled lists to sort for timing
    pub num_repeat: usize,
    /// Seed for the workload random generator
    pub seed: u64,
}

/// Sorting algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Bubble sort with early exit on a swap-free pass
    BubbleSort,
    /// Top-down merge sort with scratch buffers
    MergeSort,
    /// Quicksort with last-element pivot
    QuickSort,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            algorithm: SortAlgorithm::BubbleSort,
            list_size_exp: 2,
            num_repeat: 10,
            seed: 0,
        }
    }
}

impl BenchmarkConfig {
    /// Create a new benchmark configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Actual number of elements per list: 4^list_size_exp
    pub fn list_size(&self) -> usize {
        4usize.pow(self.list_size_exp)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.num_repeat == 0 {
            return Err(SorbError::ConfigError(
                "Repeat count must be greater than 0".to_string(),
            ));
        }

        if self.num_repeat > MAX_NUM_REPEAT {
            return Err(SorbError::ConfigError(format!(
                "Too many repeats: {} (max: {})",
                self.num_repeat, MAX_NUM_REPEAT
            )));
        }

        if self.list_size_exp > MAX_LIST_SIZE_EXP {
            return Err(SorbError::ConfigError(format!(
                "List size exponent too large: {} (max: {})",
                self.list_size_exp, MAX_LIST_SIZE_EXP
            )));
        }

        // The whole workload is held in memory at once
        let workload_bytes = self.list_size() as u64
            * self.num_repeat as u64
            * std::mem::size_of::<i64>() as u64;
        if workload_bytes > MAX_WORKLOAD_BYTES {
            return Err(SorbError::ConfigError(format!(
                "Workload too large: {} bytes (max: {} bytes)",
                workload_bytes, MAX_WORKLOAD_BYTES
            )));
        }

        Ok(())
    }

    /// Set the sorting algorithm
    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the list size exponent
    pub fn with_list_size_exp(mut self, exp: u32) -> Self {
        self.list_size_exp = exp;
        self
    }

    /// Set the repeat count
    pub fn with_num_repeat(mut self, num_repeat: usize) -> Self {
        self.num_repeat = num_repeat;
        self
    }

    /// Set the workload generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            SorbError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SorbError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SorbError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SorbError::ConfigError(format!("Failed to serialize configuration: {}", e)))?;

        fs::write(&config_path, content).map_err(|e| {
            SorbError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/sorb/sorb.toml or falls back to $HOME/.config/sorb/sorb.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SorbError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

impl SortAlgorithm {
    /// All selectable algorithms
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::BubbleSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::QuickSort,
    ];

    /// Command-line selector for this algorithm
    pub fn selector(&self) -> &'static str {
        match self {
            SortAlgorithm::BubbleSort => "bubble_sort",
            SortAlgorithm::MergeSort => "merge_sort",
            SortAlgorithm::QuickSort => "quick_sort",
        }
    }

    /// Human-readable name used in reports
    pub fn description(&self) -> &'static str {
        match self {
            SortAlgorithm::BubbleSort => "Bubble Sort",
            SortAlgorithm::MergeSort => "MergeSort",
            SortAlgorithm::QuickSort => "QuickSort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SorbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bubble_sort" => Ok(SortAlgorithm::BubbleSort),
            "merge_sort" => Ok(SortAlgorithm::MergeSort),
            "quick_sort" => Ok(SortAlgorithm::QuickSort),
            other => Err(SorbError::ConfigError(format!(
                "Unknown sort type: {} (expected bubble_sort, merge_sort or quick_sort)",
                other
            ))),
        }
    }
}
