//! Tour representation for the taboo search.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordering of all nodes, read as a closed tour: the last node connects
/// back to the first wherever closed cost is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The visiting order, a permutation of `1..=n`.
    pub tour: Vec<usize>,
}

impl Solution {
    /// Wrap an existing visiting order.
    pub fn new(tour: Vec<usize>) -> Self {
        Solution { tour }
    }

    /// Produce a uniformly random permutation of `1..=n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut tour: Vec<usize> = (1..=n).collect();
        tour.shuffle(rng);
        Solution { tour }
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// The leading node of the tour.
    pub fn first(&self) -> usize {
        self.tour[0]
    }

    /// Check that the tour is a bijection onto `{1..n}`.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.tour.len() != n {
            return false;
        }

        let mut seen = vec![false; n + 1];
        for &node in &self.tour {
            if node == 0 || node > n || seen[node] {
                return false;
            }
            seen[node] = true;
        }

        true
    }

    /// The tour obtained by swapping the elements at positions `i` and `j`.
    pub fn swapped(&self, i: usize, j: usize) -> Solution {
        let mut tour = self.tour.clone();
        tour.swap(i, j);
        Solution { tour }
    }

    /// The tour in closed form, with the leading node repeated at the end.
    pub fn closed(&self) -> Vec<usize> {
        let mut closed = self.tour.clone();
        if let Some(&first) = self.tour.first() {
            closed.push(first);
        }
        closed
    }
}
