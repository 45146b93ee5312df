use std::collections::VecDeque;
use std::time::Instant;

use image::RgbaImage;

use crate::config::HISTORY_CAPACITY;

/// Immutable full copy of the raster taken at a point in time.
#[derive(Clone, Debug)]
pub struct HistorySnapshot {
    taken_at: Instant,
    pixels: RgbaImage,
}

impl HistorySnapshot {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            taken_at: Instant::now(),
            pixels,
        }
    }

    pub fn taken_at(&self) -> Instant {
        self.taken_at
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Bytes held by this snapshot.
    pub fn byte_len(&self) -> usize {
        self.pixels.as_raw().len()
    }
}

/// Bounded step-back history of full raster snapshots, oldest first.
///
/// The newest entry always mirrors the raster as of the last checkpoint.
/// Undo drops it and hands back the entry below, which the caller restores.
/// The oldest retained entry can only leave through eviction, never through
/// undo, so repeated undo settles on it.
pub struct History {
    snapshots: VecDeque<HistorySnapshot>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most [`HISTORY_CAPACITY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a snapshot, evicting the oldest one past capacity.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            log::debug!("history full, evicted oldest snapshot");
        }
    }

    /// Drop the newest snapshot and return the one that should now be shown.
    ///
    /// Returns `None` without changing anything when only the floor entry remains.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if self.snapshots.len() <= 1 {
            log::debug!("undo ignored, history at its oldest entry");
            return None;
        }
        self.snapshots.pop_back();
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    pub fn latest(&self) -> Option<&HistorySnapshot> {
        self.snapshots.back()
    }

    pub fn oldest(&self) -> Option<&HistorySnapshot> {
        self.snapshots.front()
    }

    /// Total bytes held across all snapshots.
    pub fn memory_usage(&self) -> usize {
        self.snapshots.iter().map(HistorySnapshot::byte_len).sum()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
