//! Short-term taboo memory.

use std::collections::VecDeque;

/// Bounded FIFO of recently committed node ids.
///
/// Holds node identifiers, not whole tours. Pushing beyond capacity evicts
/// the oldest entry, so the length never exceeds the capacity.
#[derive(Debug, Clone)]
pub struct TabooMemory {
    entries: VecDeque<usize>,
    capacity: usize,
}

impl TabooMemory {
    /// Create an empty memory with the given capacity.
    pub fn new(capacity: usize) -> Self {
        TabooMemory {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a node id, evicting the oldest entry at capacity.
    pub fn push(&mut self, node: usize) {
        self.entries.push_back(node);

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Whether the given node id is currently held.
    pub fn contains(&self, node: usize) -> bool {
        self.entries.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.entries.iter()
    }
}
