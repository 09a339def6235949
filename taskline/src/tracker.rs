//! Reference-number tracking for work item ids.
//!
//! An explicit service for id uniqueness checks. The caller owns it and
//! passes it wherever new ids are minted, instead of sharing a hidden
//! global set across tables.

use rustc_hash::FxHashSet;

use crate::models::{ItemId, WorkItem};

/// Tracks which work item ids are in use and hands out fresh ones.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTracker {
    used: FxHashSet<ItemId>,
}

impl ReferenceTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded with every id in a work item tree, subtasks included.
    pub fn initialize(items: &[WorkItem]) -> Self {
        let mut tracker = Self::new();
        tracker.seed(items);
        tracker
    }

    fn seed(&mut self, items: &[WorkItem]) {
        for item in items {
            self.used.insert(item.id);
            self.seed(&item.subtasks);
        }
    }

    /// Claim an id. Returns false if it was already in use.
    pub fn reserve(&mut self, id: ItemId) -> bool {
        self.used.insert(id)
    }

    /// Whether an id is currently in use.
    pub fn is_used(&self, id: ItemId) -> bool {
        self.used.contains(&id)
    }

    /// Return an id to the pool. Returns false if it was not in use.
    pub fn release(&mut self, id: ItemId) -> bool {
        self.used.remove(&id)
    }

    /// Forget all reservations.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Reserve and return the smallest id greater than every used id
    /// (1 when the tracker is empty).
    pub fn next_id(&mut self) -> ItemId {
        let id = self.used.iter().copied().max().map_or(1, |max| max + 1);
        self.used.insert(id);
        id
    }

    /// Number of ids in use.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
