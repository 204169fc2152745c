//! Data models module
//!
//! Contains result data models and timing metrics definitions.

pub mod result;

// Re-export commonly used types
pub use result::{BenchmarkResult, SortMetrics};
