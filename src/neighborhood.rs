//! Pairwise-swap neighborhood generation.

use itertools::Itertools;

use crate::config::TabooFilter;
use crate::solution::Solution;
use crate::taboo::TabooMemory;

/// Enumerate every single-swap variant of `solution`, filtered by the taboo
/// memory.
///
/// Positions `(i, j)` with `i < j` are visited with the outer index ascending
/// and the inner index ascending, which yields exactly `n * (n - 1) / 2` raw
/// candidates and fixes the downstream tie-break: the first candidate with
/// minimal cost wins.
pub fn generate_neighbors(
    solution: &Solution,
    taboo: &TabooMemory,
    filter: TabooFilter,
) -> Vec<Solution> {
    (0..solution.len())
        .tuple_combinations()
        .map(|(i, j)| solution.swapped(i, j))
        .filter(|candidate| !is_taboo(candidate, taboo, filter))
        .collect()
}

fn is_taboo(candidate: &Solution, taboo: &TabooMemory, filter: TabooFilter) -> bool {
    match filter {
        // The memory holds single node ids, so a whole candidate tour never
        // matches one and nothing is excluded in this mode.
        TabooFilter::WholeTour => false,
        TabooFilter::LeadingNode => taboo.contains(candidate.first()),
    }
}
