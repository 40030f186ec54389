use chrono::{DateTime, Utc};
use foundation::ids::ShipId;

/// Playback position of one ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    pub(crate) ship: ShipId,
    pub(crate) index: usize,
    pub(crate) last_shown: Option<DateTime<Utc>>,
}

impl Cursor {
    pub(crate) fn new(ship: ShipId) -> Self {
        Self {
            ship,
            index: 0,
            last_shown: None,
        }
    }

    pub fn ship(&self) -> &ShipId {
        &self.ship
    }

    /// Number of samples shown so far.
    pub fn steps_taken(&self) -> usize {
        self.index
    }

    /// Timestamp of this ship's most recently shown sample.
    ///
    /// Displayed time is a per-ship value; there is no single field that
    /// whichever ship moved last silently overwrites.
    pub fn last_shown(&self) -> Option<DateTime<Utc>> {
        self.last_shown
    }
}
