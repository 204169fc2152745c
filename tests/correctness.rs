use rand::{rngs::SmallRng, Rng, SeedableRng};
use sorb::config::SortAlgorithm;
use sorb::sort::{strategy_for, SortStrategy};

fn sorted_copy(data: &[i64]) -> Vec<i64> {
    let mut copy = data.to_vec();
    copy.sort_unstable();
    copy
}

#[test]
fn test_all_algorithms_sort_reference_scenarios() {
    let scenarios: &[&[i64]] = &[
        &[5, 3, 1, 4, 2],
        &[],
        &[1, 1, 1],
        &[1],
        &[2, 1],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[0, -3, 7, -3, 2],
    ];

    for algorithm in SortAlgorithm::ALL {
        let strategy = strategy_for(algorithm);
        for scenario in scenarios {
            let mut data = scenario.to_vec();
            strategy.sort(&mut data);
            assert_eq!(
                data,
                sorted_copy(scenario),
                "{} failed on {:?}",
                strategy.name(),
                scenario
            );
        }
    }
}

#[test]
fn test_all_algorithms_agree_on_random_data() {
    let mut rng = SmallRng::seed_from_u64(7);

    for len in [0usize, 1, 2, 17, 100, 1000] {
        let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-500..500)).collect();
        let expected = sorted_copy(&data);

        for algorithm in SortAlgorithm::ALL {
            let mut actual = data.to_vec();
            strategy_for(algorithm).sort(&mut actual);
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn test_sorting_preserves_multiset() {
    let data = vec![3, 3, 1, 2, 2, 2, 9, -1];

    for algorithm in SortAlgorithm::ALL {
        let mut sorted = data.to_vec();
        strategy_for(algorithm).sort(&mut sorted);

        // Same values, same multiplicities
        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
        assert_eq!(sorted.len(), data.len());
    }
}

#[test]
fn test_strategy_names() {
    assert_eq!(strategy_for(SortAlgorithm::BubbleSort).name(), "Bubble Sort");
    assert_eq!(strategy_for(SortAlgorithm::MergeSort).name(), "MergeSort");
    assert_eq!(strategy_for(SortAlgorithm::QuickSort).name(), "QuickSort");
}
