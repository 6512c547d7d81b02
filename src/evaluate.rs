//! Tour cost evaluation.
//!
//! Two modes are kept distinct on purpose. The open-path cost seeds the
//! best-known value once, at solver construction, and leaves out the closing
//! edge. Every candidate is then scored with the closed-tour cost, which
//! includes it. The improvement test therefore compares a full cycle against
//! an open-path baseline on the very first iteration.

use crate::error::Result;
use crate::matrix::CostMatrix;
use crate::solution::Solution;

/// Sum of consecutive edge costs, without the closing edge back to the start.
pub fn open_path_cost(matrix: &CostMatrix, solution: &Solution) -> Result<f64> {
    let mut total = 0.0;

    for pair in solution.tour.windows(2) {
        total += matrix.cost(pair[0], pair[1])?;
    }

    Ok(total)
}

/// Sum of consecutive edge costs plus the closing edge from the last node
/// back to the first.
///
/// Degenerate consecutive pairs (`a == b`) contribute zero cost instead of
/// failing the lookup.
pub fn closed_tour_cost(matrix: &CostMatrix, solution: &Solution) -> Result<f64> {
    let mut total = 0.0;

    for pair in solution.tour.windows(2) {
        if pair[0] == pair[1] {
            continue;
        }
        total += matrix.cost(pair[0], pair[1])?;
    }

    if let (Some(&first), Some(&last)) = (solution.tour.first(), solution.tour.last()) {
        total += matrix.cost(first, last)?;
    }

    Ok(total)
}
