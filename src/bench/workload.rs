//! Deterministic workload generation
//!
//! Builds the shuffled integer sequences a benchmark run sorts. For a
//! fixed seed the generated sequences are bit-identical across runs,
//! which keeps timing comparisons and tests reproducible.

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

/// A batch of independently shuffled sequences, each a permutation of
/// `0..list_size`. Every sequence is sorted in place exactly once by
/// the benchmark runner and then discarded.
#[derive(Debug, Clone)]
pub struct Workload {
    sequences: Vec<Vec<i64>>,
}

impl Workload {
    /// Generate `num_repeat` shuffled permutations of `0..list_size`.
    ///
    /// A single generator seeded from `seed` drives all shuffles, in
    /// sequence order, so the whole workload is a pure function of
    /// (list_size, num_repeat, seed).
    pub fn generate(list_size: usize, num_repeat: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let sequences = (0..num_repeat)
            .map(|_| {
                let mut sequence: Vec<i64> = (0..list_size as i64).collect();
                sequence.shuffle(&mut rng);
                sequence
            })
            .collect();

        Self { sequences }
    }

    /// Number of sequences in the workload
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the workload contains no sequences
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Read access to the generated sequences
    pub fn sequences(&self) -> &[Vec<i64>] {
        &self.sequences
    }

    /// Mutable access for sorting the sequences in place
    pub fn sequences_mut(&mut self) -> &mut [Vec<i64>] {
        &mut self.sequences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count() {
        let workload = Workload::generate(16, 5, 0);
        assert_eq!(workload.len(), 5);
        assert!(!workload.is_empty());
        assert!(workload.sequences().iter().all(|s| s.len() == 16));
    }

    #[test]
    fn test_sequences_are_permutations() {
        let workload = Workload::generate(64, 3, 0);
        for sequence in workload.sequences() {
            let mut sorted = sequence.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..64).collect::<Vec<i64>>());
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let first = Workload::generate(16, 5, 0);
        let second = Workload::generate(16, 5, 0);
        assert_eq!(first.sequences(), second.sequences());
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = Workload::generate(256, 1, 0);
        let second = Workload::generate(256, 1, 1);
        assert_ne!(first.sequences(), second.sequences());
    }

    #[test]
    fn test_empty_and_degenerate_sizes() {
        let empty = Workload::generate(0, 2, 0);
        assert!(empty.sequences().iter().all(|s| s.is_empty()));

        let single = Workload::generate(1, 2, 0);
        assert!(single.sequences().iter().all(|s| s == &vec![0]));

        let none = Workload::generate(16, 0, 0);
        assert!(none.is_empty());
    }
}
