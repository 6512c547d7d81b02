//! Configuration parameters for the taboo search.

use serde::{Deserialize, Serialize};

/// How candidate tours are tested against the taboo memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TabooFilter {
    /// Test whether the memory contains the candidate tour as a whole.
    /// The memory stores single node ids, so this never matches and every
    /// candidate passes the filter.
    #[default]
    WholeTour,
    /// Exclude candidates whose leading node is currently in the memory.
    LeadingNode,
}

/// Settings for a solver instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Taboo memory capacity (K), at least 1
    pub taboo_capacity: usize,
    /// Seed for the initial-solution shuffle; drawn at random when absent
    pub seed: Option<u64>,
    /// Candidate filter mode
    pub filter: TabooFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            taboo_capacity: 2,
            seed: None,
            filter: TabooFilter::WholeTour,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the taboo memory capacity.
    pub fn with_taboo_capacity(mut self, capacity: usize) -> Self {
        self.taboo_capacity = capacity;
        self
    }

    /// Set the seed for the initial-solution shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the candidate filter mode.
    pub fn with_filter(mut self, filter: TabooFilter) -> Self {
        self.filter = filter;
        self
    }
}
