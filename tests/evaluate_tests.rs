//! Unit tests for the two cost-evaluation modes.

use taboo_tsp::error::SolverError;
use taboo_tsp::evaluate::{closed_tour_cost, open_path_cost};
use taboo_tsp::matrix::CostMatrix;
use taboo_tsp::solution::Solution;

fn four_node_matrix() -> CostMatrix {
    CostMatrix::from_entries(vec![
        (1, 2, 1.0),
        (1, 3, 3.0),
        (1, 4, 4.0),
        (2, 3, 2.0),
        (2, 4, 5.0),
        (3, 4, 6.0),
    ])
}

#[test]
fn test_open_path_cost_excludes_closing_edge() {
    let matrix = four_node_matrix();
    let solution = Solution::new(vec![2, 4, 3, 1]);

    // 2-4 + 4-3 + 3-1, no 1-2 closing edge.
    assert_eq!(open_path_cost(&matrix, &solution).unwrap(), 14.0);
}

#[test]
fn test_closed_tour_cost_includes_closing_edge() {
    let matrix = four_node_matrix();
    let solution = Solution::new(vec![2, 4, 3, 1]);

    assert_eq!(closed_tour_cost(&matrix, &solution).unwrap(), 15.0);
}

#[test]
fn test_modes_differ_by_exactly_the_closing_edge() {
    let matrix = four_node_matrix();
    let solution = Solution::new(vec![1, 4, 3, 2]);

    let open = open_path_cost(&matrix, &solution).unwrap();
    let closed = closed_tour_cost(&matrix, &solution).unwrap();

    assert_eq!(closed - open, matrix.cost(1, 2).unwrap());
}

#[test]
fn test_closed_cost_skips_degenerate_pairs() {
    let matrix = CostMatrix::from_entries(vec![(1, 2, 5.0)]);
    let sequence = Solution::new(vec![1, 1, 2]);

    // The 1-1 pair contributes zero instead of failing the lookup.
    assert_eq!(closed_tour_cost(&matrix, &sequence).unwrap(), 10.0);
}

#[test]
fn test_open_cost_does_not_mask_degenerate_pairs() {
    let matrix = CostMatrix::from_entries(vec![(1, 2, 5.0)]);
    let sequence = Solution::new(vec![1, 1, 2]);

    assert!(matches!(
        open_path_cost(&matrix, &sequence),
        Err(SolverError::MissingCost { a: 1, b: 1 })
    ));
}

#[test]
fn test_missing_edge_is_fatal_in_both_modes() {
    let matrix = CostMatrix::from_entries(vec![(1, 2, 1.0), (2, 3, 2.0)]);
    let solution = Solution::new(vec![2, 1, 3]);

    assert!(matches!(
        open_path_cost(&matrix, &solution),
        Err(SolverError::MissingCost { a: 1, b: 3 })
    ));
    assert!(matches!(
        closed_tour_cost(&matrix, &solution),
        Err(SolverError::MissingCost { a: 1, b: 3 })
    ));
}
