#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use binsum::entities::{Size, Solution};
    use binsum::strategy::{Strategy, enumerate_subsets, enumerate_subsets_brute_force};
    use binsum::util::assertions::{same_solutions, solutions_are_sound};

    const N_RANDOM_INSTANCES: usize = 200;

    #[test_case(10, &[2, 8], 1; "simple case")]
    #[test_case(10, &[2, 5, 4, 7, 1, 3, 8, 6], 8; "multiple solutions")]
    #[test_case(15, &[2, 3, 4, 5], 0; "no solution")]
    #[test_case(10, &[10, 5, 3, 2], 2; "single item exact match")]
    #[test_case(0, &[], 1; "empty instance")]
    fn solution_count(capacity: Size, items: &[Size], expected: usize) {
        for strategy in Strategy::ALL {
            let solutions = strategy.solve(capacity, items);
            assert_eq!(solutions.len(), expected, "{strategy}");
            assert!(solutions_are_sound(capacity, items, &solutions));
        }
    }

    #[test_case(15, &[3, 5, 7, 8, 10]; "instance 1")]
    #[test_case(20, &[5, 10, 7, 3, 15]; "instance 2")]
    fn every_solution_fills_the_bin(capacity: Size, items: &[Size]) {
        let solutions = enumerate_subsets(capacity, items);
        assert!(!solutions.is_empty());
        for s in &solutions {
            assert_eq!(s.sizes().iter().sum::<Size>(), capacity);
        }
    }

    #[test]
    fn backtracking_agrees_with_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0);

        for _ in 0..N_RANDOM_INSTANCES {
            let n_items: usize = rng.random_range(0..=12);
            let items: Vec<Size> = (0..n_items).map(|_| rng.random_range(1..=10)).collect();
            let capacity: Size = rng.random_range(0..=30);

            let bt = enumerate_subsets(capacity, &items);
            let bf = enumerate_subsets_brute_force(capacity, &items);

            assert!(
                same_solutions(&bt, &bf),
                "capacity: {capacity}, items: {items:?}, backtracking: {bt:?}, brute force: {bf:?}"
            );
            assert!(solutions_are_sound(capacity, &items, &bt));
        }
    }

    #[test]
    fn duplicates_are_counted_by_position() {
        // every pair of distinct positions sums to 2: C(4, 2) solutions
        let solutions = enumerate_subsets(2, &[1, 1, 1, 1]);
        assert_eq!(solutions, vec![Solution::from_selection(vec![1, 1]); 6]);
    }

    #[test]
    fn all_items_fill_the_bin() {
        let items: Vec<Size> = (1..=20).collect();
        let capacity: Size = items.iter().sum();
        let solutions = enumerate_subsets(capacity, &items);

        // the full selection is the only one reaching the total
        assert_eq!(solutions, vec![Solution::from_selection(items)]);
    }
}
