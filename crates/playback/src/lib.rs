//! Track playback on a single shared clock.
//!
//! One [`Driver`] owns an explicit cursor per ship; every [`Driver::tick`]
//! advances all unfinished cursors by one sample and pushes the new
//! positions through the map handle. There are no per-ship timers: when the
//! embedding stops ticking, nothing is left scheduled.

pub mod cursor;
pub mod driver;
pub mod tick;

pub use cursor::Cursor;
pub use driver::{Driver, STEP_CAP, TickSummary};
pub use tick::Tick;
