//! Sorting engine module
//!
//! Contains the strategy abstraction over interchangeable in-place
//! sorting algorithms and the concrete implementations.

pub mod bubble;
pub mod merge;
pub mod quick;

// Re-export commonly used types
pub use bubble::BubbleSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use crate::config::SortAlgorithm;

/// An interchangeable in-place sorting algorithm.
///
/// Implementations sort the slice ascending without allocating a
/// replacement for it; only algorithm-internal scratch space may be
/// allocated for the duration of the call. Empty and single-element
/// slices are valid inputs and are left untouched.
pub trait SortStrategy {
    /// Human-readable name used in reports
    fn name(&self) -> &'static str;

    /// Sort the slice ascending, in place
    fn sort(&self, data: &mut [i64]);
}

/// Resolve the strategy implementation for an algorithm selector
pub fn strategy_for(algorithm: SortAlgorithm) -> &'static dyn SortStrategy {
    match algorithm {
        SortAlgorithm::BubbleSort => &BubbleSort,
        SortAlgorithm::MergeSort => &MergeSort,
        SortAlgorithm::QuickSort => &QuickSort,
    }
}
