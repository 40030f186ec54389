use chrono::{DateTime, Utc};
use foundation::ids::ShipId;
use map::{Map, MapEngine, MapError};
use track::TrackSet;
use tracing::{debug, info};

use crate::cursor::Cursor;
use crate::tick::Tick;

/// Maximum samples replayed per ship: one week of minutes.
pub const STEP_CAP: usize = 1440;

/// What one tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Ships whose marker moved this tick.
    pub moved: usize,
    /// Ships still unfinished after this tick.
    pub remaining: usize,
}

/// Steps every ship's cursor through its track on a shared clock.
///
/// Cursors advance in ship-id order, one sample per tick each, until their
/// track ends or the step cap cuts them off. All scheduling stays with the
/// caller; dropping the driver leaves nothing pending.
#[derive(Debug)]
pub struct Driver {
    tracks: TrackSet,
    cursors: Vec<Cursor>,
    tick: Tick,
    cap: usize,
    last_shown: Option<DateTime<Utc>>,
}

impl Driver {
    pub fn new(tracks: TrackSet) -> Self {
        Self::with_cap(tracks, STEP_CAP)
    }

    pub fn with_cap(tracks: TrackSet, cap: usize) -> Self {
        let cursors = tracks.ships().cloned().map(Cursor::new).collect();
        Self {
            tracks,
            cursors,
            tick: Tick::new(0),
            cap,
            last_shown: None,
        }
    }

    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    pub fn cursor(&self, ship: &ShipId) -> Option<&Cursor> {
        self.cursors.iter().find(|c| c.ship() == ship)
    }

    /// Timestamp of the most recently shown sample across all ships.
    ///
    /// Convenience for a single status line; per-ship values live on the
    /// cursors.
    pub fn last_shown(&self) -> Option<DateTime<Utc>> {
        self.last_shown
    }

    pub fn is_finished(&self) -> bool {
        self.cursors
            .iter()
            .all(|cursor| cursor.index >= self.cursor_limit(cursor))
    }

    /// Advance the shared clock by one tick, moving every unfinished ship's
    /// marker by one sample.
    pub fn tick<E: MapEngine>(&mut self, map: &mut Map<E>) -> Result<TickSummary, MapError> {
        let tick = self.tick;
        self.tick = tick.next();

        let mut moved = 0;
        let mut remaining = 0;
        for cursor in &mut self.cursors {
            let Some(track) = self.tracks.get(&cursor.ship) else {
                continue;
            };
            let limit = track.len().min(self.cap);
            if cursor.index >= limit {
                continue;
            }
            let Some(sample) = track.get(cursor.index) else {
                continue;
            };

            map.set_ship_position(&cursor.ship, sample.position)?;
            cursor.last_shown = Some(sample.timestamp);
            self.last_shown = Some(sample.timestamp);
            cursor.index += 1;
            moved += 1;
            debug!(
                ship = %cursor.ship,
                point = cursor.index,
                of = limit,
                "ship moved"
            );

            if cursor.index >= limit {
                info!(ship = %cursor.ship, steps = cursor.index, "ship reached end of playback");
            } else {
                remaining += 1;
            }
        }

        Ok(TickSummary {
            tick,
            moved,
            remaining,
        })
    }

    fn cursor_limit(&self, cursor: &Cursor) -> usize {
        self.tracks
            .get(&cursor.ship)
            .map(|track| track.len().min(self.cap))
            .unwrap_or(0)
    }
}
