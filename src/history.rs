use log::debug;
use thiserror::Error;

use crate::editor::Snapshot;

/// Errors that can occur when taking snapshots back out of the history
#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    /// `pop` was called with no stored snapshots
    #[error("history is empty")]
    Empty,
}

/// Manages the stack of captured snapshots for undo.
///
/// The history is opaque storage: it never inspects or alters snapshot
/// content, and `push`/`pop` are its only mutators. Order is strict
/// LIFO: `pop` always returns the most recently pushed snapshot not
/// yet popped.
#[derive(Debug, Default)]
pub struct EditorHistory {
    snapshots: Vec<Snapshot>,
    limit: Option<usize>,
}

impl EditorHistory {
    /// Creates a new empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bounded history. Pushing at capacity evicts the
    /// *oldest* snapshot; the most recent `limit` entries are always
    /// retained.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Appends a snapshot at the most-recent end.
    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(limit) = self.limit {
            while self.snapshots.len() >= limit.max(1) {
                let evicted = self.snapshots.remove(0);
                debug!("history at capacity, evicting snapshot from {}", evicted.taken_at());
            }
        }
        self.snapshots.push(snapshot);
    }

    /// Removes and returns the most recently pushed snapshot.
    pub fn pop(&mut self) -> Result<Snapshot, HistoryError> {
        self.snapshots.pop().ok_or(HistoryError::Empty)
    }

    /// Returns true if there is at least one snapshot to pop.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops all stored snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
