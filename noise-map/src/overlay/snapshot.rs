//! Immutable overlay snapshots with replace-wholesale publication.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::domain::{BoundarySegment, Station};

/// An immutable, published view of the station map and its overlay.
///
/// Once constructed a snapshot never changes; data reloads produce a new
/// snapshot rather than mutating the old one, so any number of concurrent
/// readers can hold on to it safely.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSnapshot {
    stations: Vec<Station>,
    segments: Vec<BoundarySegment>,
    computed_at: DateTime<Utc>,
}

impl MapSnapshot {
    /// Assemble a snapshot from a station list and its computed overlay.
    pub fn new(stations: Vec<Station>, segments: Vec<BoundarySegment>) -> Self {
        MapSnapshot {
            stations,
            segments,
            computed_at: Utc::now(),
        }
    }

    /// The stations this snapshot was computed from.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The overlay segments, in diagram ridge order.
    pub fn segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    /// When the snapshot was computed.
    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }
}

/// Shared handle to the currently published snapshot.
///
/// Readers take an `Arc` to the current snapshot and never block a
/// publish; publishing swaps the whole `Arc` while earlier readers keep
/// their (still valid) view.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Arc<MapSnapshot>>>,
}

impl SnapshotStore {
    /// Create a store publishing an initial snapshot.
    pub fn new(initial: MapSnapshot) -> Self {
        SnapshotStore {
            inner: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// The currently published snapshot.
    pub fn current(&self) -> Arc<MapSnapshot> {
        // A poisoned lock only means a writer panicked mid-swap; the Arc
        // inside is still a complete snapshot.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish a new snapshot, replacing the current one wholesale.
    ///
    /// Returns the previously published snapshot.
    pub fn publish(&self, snapshot: MapSnapshot) -> Arc<MapSnapshot> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(snapshot))
    }
}
