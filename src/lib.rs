//! SORB - Sorting Rust Bench
//!
//! A command-line benchmark for comparison-based in-place sorting
//! algorithms, timing interchangeable strategies over reproducible
//! randomized workloads.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod models;
pub mod sort;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SorbError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Benchmark execution error
    BenchmarkError(String),
}

impl fmt::Display for SorbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SorbError::IoError(err) => write!(f, "I/O error: {}", err),
            SorbError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SorbError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
        }
    }
}

impl std::error::Error for SorbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SorbError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SorbError {
    fn from(err: std::io::Error) -> Self {
        SorbError::IoError(err)
    }
}

impl From<serde_json::Error> for SorbError {
    fn from(err: serde_json::Error) -> Self {
        SorbError::BenchmarkError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for SorbError {
    fn from(err: toml::de::Error) -> Self {
        SorbError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SorbError {
    fn from(err: toml::ser::Error) -> Self {
        SorbError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for SORB operations
pub type Result<T> = std::result::Result<T, SorbError>;

// Common constants
pub const APP_NAME: &str = "sorb";
pub const CONFIG_FILE: &str = "sorb.toml";
