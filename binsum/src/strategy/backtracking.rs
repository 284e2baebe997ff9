use crate::entities::{Size, Solution, SolutionSet};

/// Enumerates every selection of item positions whose sizes sum exactly to `capacity`,
/// using a depth-first backtracking search.
///
/// Positions are visited in input order and every selection is generated exactly once.
/// A branch is abandoned as soon as its running sum exceeds the capacity, and it is
/// closed (not extended any further) as soon as its running sum matches the capacity.
/// Every solution is reported with its sizes sorted. Selections of equal sizes taken
/// from different positions are reported separately.
///
/// A capacity of zero is matched by the empty selection, which is then the only solution.
pub fn enumerate_subsets(capacity: Size, items: &[Size]) -> SolutionSet {
    let mut solutions = vec![];
    let mut current_bin = Vec::with_capacity(items.len());

    backtrack(
        capacity as i128,
        items,
        0,
        0,
        &mut current_bin,
        &mut solutions,
    );

    solutions
}

fn backtrack(
    capacity: i128,
    items: &[Size],
    start: usize,
    current_sum: i128,
    current_bin: &mut Vec<Size>,
    solutions: &mut SolutionSet,
) {
    if current_sum == capacity {
        solutions.push(Solution::from_selection(current_bin.clone()));
        return;
    }
    if current_sum > capacity {
        return;
    }

    for (i, &item) in items.iter().enumerate().skip(start) {
        let next_sum = current_sum + item as i128;
        if next_sum <= capacity {
            current_bin.push(item);
            backtrack(capacity, items, i + 1, next_sum, current_bin, solutions);
            current_bin.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sizes(solutions: SolutionSet) -> Vec<Vec<Size>> {
        solutions.into_iter().map(Solution::into_sizes).collect()
    }

    #[test]
    fn two_items_fill_the_bin() {
        assert_eq!(sizes(enumerate_subsets(10, &[2, 8])), vec![vec![2, 8]]);
    }

    #[test]
    fn multiple_solutions() {
        let items = [2, 5, 4, 7, 1, 3, 8, 6];
        let solutions = sizes(enumerate_subsets(10, &items));

        assert_eq!(solutions.len(), 8);
        for s in &solutions {
            assert_eq!(s.iter().sum::<Size>(), 10);
        }
        assert!(solutions.contains(&vec![2, 8]));
        assert!(solutions.contains(&vec![3, 7]));
        assert!(solutions.contains(&vec![4, 6]));
    }

    #[test]
    fn enumeration_order_follows_positions() {
        let solutions = sizes(enumerate_subsets(10, &[2, 5, 4, 7, 1, 3, 8, 6]));
        assert_eq!(
            solutions,
            vec![
                vec![2, 3, 5],
                vec![1, 2, 3, 4],
                vec![1, 2, 7],
                vec![2, 8],
                vec![1, 4, 5],
                vec![4, 6],
                vec![3, 7],
                vec![1, 3, 6],
            ]
        );
    }

    #[test_case(15, &[2, 3, 4, 5]; "total too small")]
    #[test_case(1, &[2, 3]; "every item too large")]
    #[test_case(5, &[]; "no items")]
    fn no_solution(capacity: Size, items: &[Size]) {
        assert!(enumerate_subsets(capacity, items).is_empty());
    }

    #[test]
    fn single_item_exact_match() {
        let solutions = sizes(enumerate_subsets(10, &[10, 5, 3, 2]));
        assert_eq!(solutions, vec![vec![10], vec![2, 3, 5]]);
    }

    #[test]
    fn equal_sizes_at_different_positions_are_reported_separately() {
        let solutions = sizes(enumerate_subsets(5, &[5, 5, 2, 3]));
        assert_eq!(solutions, vec![vec![5], vec![5], vec![2, 3]]);
    }

    #[test_case(&[]; "no items")]
    #[test_case(&[1, 2, 3]; "some items")]
    #[test_case(&[0, 0]; "zero sized items")]
    fn zero_capacity_is_filled_by_the_empty_selection(items: &[Size]) {
        assert_eq!(sizes(enumerate_subsets(0, items)), vec![Vec::<Size>::new()]);
    }

    #[test]
    fn exact_match_closes_the_branch() {
        // [5, 0] also sums to 5, but the branch is closed once [5] matches
        let solutions = sizes(enumerate_subsets(5, &[5, 0]));
        assert_eq!(solutions, vec![vec![5]]);
    }

    #[test]
    fn negative_sizes_use_plain_addition() {
        let solutions = sizes(enumerate_subsets(3, &[-1, 4, 3]));
        assert_eq!(solutions, vec![vec![-1, 4], vec![3]]);
    }

    #[test]
    fn negative_capacity_has_no_solution() {
        // the empty root selection already exceeds the capacity
        assert!(enumerate_subsets(-1, &[1, -1]).is_empty());
    }

    #[test]
    fn large_sizes_do_not_overflow() {
        let solutions = sizes(enumerate_subsets(Size::MAX, &[Size::MAX, Size::MAX, 1]));
        assert_eq!(solutions, vec![vec![Size::MAX], vec![Size::MAX]]);
    }

    #[test]
    fn input_is_left_untouched_and_output_is_deterministic() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let first = enumerate_subsets(10, &items);
        let second = enumerate_subsets(10, &items);
        assert_eq!(items, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(first, second);
    }
}
