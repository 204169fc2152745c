use sorb::bench::{SortBenchmark, Workload};
use sorb::config::{BenchmarkConfig, SortAlgorithm};
use sorb::models::BenchmarkResult;

fn reference_config() -> BenchmarkConfig {
    BenchmarkConfig::default()
        .with_algorithm(SortAlgorithm::BubbleSort)
        .with_list_size_exp(2)
        .with_num_repeat(5)
        .with_seed(0)
}

#[test]
fn test_reference_run_produces_valid_result() {
    let benchmark = SortBenchmark::new(reference_config()).expect("config should validate");
    let result = benchmark.run().expect("benchmark run failed");

    assert_eq!(result.metrics.list_size, 16);
    assert_eq!(result.metrics.num_repeat, 5);
    assert_eq!(result.config.algorithm, SortAlgorithm::BubbleSort);

    let avg = result.metrics.avg_duration.as_secs_f64();
    assert!(avg.is_finite());
    assert!(avg >= 0.0);
    assert!(result.metrics.avg_duration <= result.metrics.elapsed);
}

#[test]
fn test_reference_workload_is_reproducible() {
    let config = reference_config();

    // The pre-shuffle workload for a fixed seed is bit-identical run to run
    let first = Workload::generate(config.list_size(), config.num_repeat, config.seed);
    let second = Workload::generate(config.list_size(), config.num_repeat, config.seed);

    assert_eq!(first.len(), 5);
    assert_eq!(first.sequences(), second.sequences());

    for sequence in first.sequences() {
        let mut sorted = sequence.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<i64>>());
    }
}

#[test]
fn test_all_algorithms_complete_a_run() {
    for algorithm in SortAlgorithm::ALL {
        let config = reference_config().with_algorithm(algorithm);
        let benchmark = SortBenchmark::new(config).expect("config should validate");
        let result = benchmark.run().expect("benchmark run failed");
        assert_eq!(result.config.algorithm, algorithm);
        assert!(result.summary().contains(algorithm.description()));
    }
}

#[test]
fn test_invalid_config_is_rejected_before_running() {
    let config = reference_config().with_num_repeat(0);
    assert!(SortBenchmark::new(config).is_err());

    let config = reference_config().with_list_size_exp(99);
    assert!(SortBenchmark::new(config).is_err());
}

#[test]
fn test_result_round_trips_through_json() {
    let benchmark =
        SortBenchmark::new(reference_config().with_algorithm(SortAlgorithm::MergeSort)).unwrap();
    let result = benchmark.run().expect("benchmark run failed");

    let json = serde_json::to_string_pretty(&result).expect("serialize");
    let restored: BenchmarkResult = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.config.algorithm, SortAlgorithm::MergeSort);
    assert_eq!(restored.metrics.list_size, result.metrics.list_size);
    assert_eq!(restored.metrics.elapsed, result.metrics.elapsed);
}
