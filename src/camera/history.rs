//! Bounded undo stack of camera poses.
//!
//! Poses are pushed before every camera move and popped by "go back". When
//! the stack is full the oldest snapshot is dropped, so retrieval is LIFO
//! while eviction is FIFO.

use std::collections::VecDeque;

use web_time::Instant;

use super::core::CameraPose;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Storage for camera-pose snapshots.
///
/// Single-writer: the camera navigator is the only caller.
pub trait PoseHistory {
    /// Push a snapshot, evicting the oldest one if over capacity.
    fn save(&mut self, pose: CameraPose);

    /// Remove and return the most recent snapshot.
    fn pop(&mut self) -> Option<CameraPose>;

    /// Drop every snapshot.
    fn clear(&mut self);

    /// Number of stored snapshots.
    fn len(&self) -> usize;

    /// Whether no snapshots are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a "go back" has somewhere to go.
    fn can_go_back(&self) -> bool {
        !self.is_empty()
    }
}

/// A stored snapshot with the time it was taken.
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    /// The saved pose.
    pub pose: CameraPose,
    /// When the pose was saved.
    pub recorded_at: Instant,
}

/// Ring-buffer [`PoseHistory`] with a fixed capacity.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl BoundedHistory {
    /// Empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] poses.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Empty history holding up to `capacity` poses.
    ///
    /// Storage grows on demand past the default capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let reserve = capacity.min(DEFAULT_HISTORY_CAPACITY) + 1;
        Self {
            entries: VecDeque::with_capacity(reserve),
            capacity,
        }
    }

    /// Maximum number of stored poses.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }
}

impl Default for BoundedHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseHistory for BoundedHistory {
    fn save(&mut self, pose: CameraPose) {
        self.entries.push_back(HistoryEntry {
            pose,
            recorded_at: Instant::now(),
        });
        while self.entries.len() > self.capacity {
            let _ = self.entries.pop_front();
        }
    }

    fn pop(&mut self) -> Option<CameraPose> {
        self.entries.pop_back().map(|entry| entry.pose)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
