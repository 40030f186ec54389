//! Ship track building: raw telemetry rows in, per-ship sorted sample
//! sequences out.

pub mod build;
pub mod error;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use foundation::geo::LonLat;
use foundation::ids::ShipId;

pub use build::build_tracks;
pub use error::TrackError;

/// One typed position report.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub position: LonLat,
    pub heading_deg: f64,
    pub timestamp: DateTime<Utc>,
}

/// Ordered sample sequence for one ship, ascending by timestamp.
///
/// Always non-empty: ships with zero rows never get a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    samples: Vec<Sample>,
}

impl Track {
    /// Returns `None` for an empty sample list.
    pub fn new(mut samples: Vec<Sample>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        // Stable: equal timestamps keep their original row order.
        samples.sort_by_key(|s| s.timestamp);
        Some(Track { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }
}

/// All ship tracks, keyed by ship id with deterministic iteration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrackSet {
    tracks: BTreeMap<ShipId, Track>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ship: ShipId, track: Track) {
        self.tracks.insert(ship, track);
    }

    pub fn get(&self, ship: &ShipId) -> Option<&Track> {
        self.tracks.get(ship)
    }

    pub fn ships(&self) -> impl Iterator<Item = &ShipId> {
        self.tracks.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ShipId, &Track)> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
