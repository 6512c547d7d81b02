//! Error types for the taboo search solver.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Fatal conditions surfaced by the solver.
///
/// Every variant is one-shot: there is no retry, default, or partial
/// recovery behind any of them.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The instance file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The instance file is not the expected JSON object shape.
    #[error("malformed instance data: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A cost lookup was attempted for a pair the matrix does not define.
    #[error("no cost defined for node pair ({a}, {b})")]
    MissingCost { a: usize, b: usize },

    /// The instance has fewer than two nodes, so no swap neighborhood exists.
    #[error("instance has {0} nodes, need at least 2")]
    TooFewNodes(usize),

    /// The taboo memory capacity must be at least 1.
    #[error("taboo capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A supplied tour is not a permutation of the instance nodes.
    #[error("tour is not a permutation of nodes 1..={expected}")]
    InvalidSolution { expected: usize },

    /// Every candidate was filtered out, leaving nothing to select.
    #[error("neighborhood is empty, no candidate to select")]
    EmptyNeighborhood,
}
