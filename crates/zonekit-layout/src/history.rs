//! Bounded undo log of full registry snapshots.
//!
//! Every undoable operation pushes a deep copy of the zone list *before*
//! it mutates anything. Undo pops the latest copy and rebuilds the
//! registry from it. There is no redo.

use std::collections::VecDeque;

use zonekit_core::Zone;

use crate::registry::ZoneRegistry;

/// Number of snapshots kept when no other depth is configured.
pub const DEFAULT_HISTORY_DEPTH: usize = 20;

/// The zone list as it was right before one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    zones: Vec<Zone>,
}

impl HistoryEntry {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn into_zones(self) -> Vec<Zone> {
        self.zones
    }
}

/// FIFO-bounded stack of [`HistoryEntry`] values.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryStack {
    /// Creates an empty stack holding at most `capacity` snapshots
    /// (at least one).
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "history capacity must be positive");
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Pushes a snapshot of `registry`; the oldest snapshot is evicted
    /// once the bound is exceeded.
    pub fn snapshot(&mut self, registry: &ZoneRegistry) {
        self.push(HistoryEntry::new(registry.snapshot()));
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::debug!("History full, dropped oldest snapshot");
        }
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    /// Restores the most recent snapshot into `registry`.
    ///
    /// The registry is cleared and re-filled zone by zone without pushing
    /// a new snapshot. Returns false (and leaves `registry` untouched)
    /// when the stack is empty.
    pub fn undo(&mut self, registry: &mut ZoneRegistry) -> bool {
        match self.pop() {
            Some(entry) => {
                registry.replace_all(entry.into_zones());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of snapshots available.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}
