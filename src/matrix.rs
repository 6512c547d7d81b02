//! Cost matrix definition and instance loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SolverError};

type RawEntries = HashMap<String, HashMap<String, f64>>;
type IndexedEntries = HashMap<usize, HashMap<usize, f64>>;

/// Backing storage for a cost matrix.
///
/// `Indexed` holds fully coerced integer node ids. `Raw` is the fallback kept
/// when any key in the instance fails integer coercion: the whole structure is
/// retained with its original string keys, never a partially coerced mix.
#[derive(Debug, Clone)]
pub enum CostData {
    Indexed(IndexedEntries),
    Raw(RawEntries),
}

/// Symmetric pairwise edge costs for a problem instance.
///
/// Costs are stored sparsely and queried canonically as
/// `cost(min(a, b), max(a, b))`. The matrix is read-only after construction;
/// a lookup for a pair it does not define is a fatal error, not a default.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: CostData,
}

impl CostMatrix {
    /// Load an instance from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse an instance from JSON text.
    ///
    /// The expected shape is an object of string-encoded node ids, each
    /// mapping to an object of string-encoded neighbor ids and numeric costs
    /// (typically upper-triangular, only pairs `a < b` present). Malformed
    /// JSON fails here, before any solving starts.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawEntries = serde_json::from_str(text)?;

        let data = match coerce_keys(&raw) {
            Some(indexed) => CostData::Indexed(indexed),
            None => CostData::Raw(raw),
        };

        Ok(CostMatrix { data })
    }

    /// Build a matrix directly from `(a, b, cost)` entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut indexed = IndexedEntries::new();

        for (a, b, cost) in entries {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            indexed.entry(lo).or_default().insert(hi, cost);
            // Every node gets a top-level entry so node_count sees it.
            indexed.entry(hi).or_default();
        }

        CostMatrix {
            data: CostData::Indexed(indexed),
        }
    }

    /// Number of nodes in the instance: the count of top-level entries.
    pub fn node_count(&self) -> usize {
        match &self.data {
            CostData::Indexed(map) => map.len(),
            CostData::Raw(map) => map.len(),
        }
    }

    /// Whether key coercion succeeded and lookups are served by integer ids.
    pub fn is_indexed(&self) -> bool {
        matches!(self.data, CostData::Indexed(_))
    }

    /// Edge cost between two distinct nodes, canonical `(min, max)` lookup.
    ///
    /// String-keyed fallback data never matches an integer lookup, so a `Raw`
    /// matrix reports every pair as missing.
    pub fn cost(&self, a: usize, b: usize) -> Result<f64> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        match &self.data {
            CostData::Indexed(map) => map
                .get(&lo)
                .and_then(|row| row.get(&hi))
                .copied()
                .ok_or(SolverError::MissingCost { a: lo, b: hi }),
            CostData::Raw(_) => Err(SolverError::MissingCost { a: lo, b: hi }),
        }
    }
}

/// Attempt full integer coercion of every key, outer and nested.
///
/// Returns `None` on the first failure so the caller can keep the raw
/// structure whole instead of a partial coercion.
fn coerce_keys(raw: &RawEntries) -> Option<IndexedEntries> {
    let mut indexed = IndexedEntries::with_capacity(raw.len());

    for (key, row) in raw {
        let id = key.trim().parse::<usize>().ok()?;
        let mut indexed_row = HashMap::with_capacity(row.len());

        for (neighbor_key, &cost) in row {
            let neighbor_id = neighbor_key.trim().parse::<usize>().ok()?;
            indexed_row.insert(neighbor_id, cost);
        }

        indexed.insert(id, indexed_row);
    }

    Some(indexed)
}
