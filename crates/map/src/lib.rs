//! The map renderer seam.
//!
//! The rendering engine itself is an external collaborator; [`MapEngine`] is
//! the contract this system consumes (named sources and layers, reusable
//! image ids, in-place source updates) and [`MapEvent`] carries its
//! notifications. [`Map`] is the owned handle that enforces the usage
//! contract (style-ready gating, a single ports layer, lazily created
//! per-ship layers, icons loaded once) and is torn down by an explicit
//! [`Map::shutdown`]. [`RecordingEngine`] is the in-memory engine used by
//! tests and headless runs.

pub mod engine;
pub mod error;
pub mod feature;
pub mod handle;
pub mod recording;
pub mod style;

pub use engine::{Icon, MapEngine, MapEvent};
pub use error::MapError;
pub use feature::{Feature, FeatureCollection};
pub use handle::{Map, MapConfig, PORT_ICON_ID, PORTS_ID, SHIP_ICON_ID};
pub use recording::{EngineOp, RecordingEngine};
pub use style::{PORT_TEXT_COLOR, SHIP_TEXT_COLOR, SymbolLayer, TextAnchor};
