use std::path::PathBuf;

use foundation::viewport::Viewport;

use crate::error::MapError;
use crate::feature::FeatureCollection;
use crate::style::SymbolLayer;

/// Notification from the rendering engine.
///
/// Events are plain data consumed by [`crate::Map::handle_event`]; source and
/// layer mutations are invalid until `StyleLoaded` has been seen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MapEvent {
    StyleLoaded,
    Moved(Viewport),
}

/// Bitmap icon asset registered with the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub path: PathBuf,
    /// Decode size in pixels; `None` keeps the bitmap's own size.
    pub size_px: Option<[u32; 2]>,
}

impl Icon {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size_px: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size_px = Some([width, height]);
        self
    }
}

/// Contract of the external map rendering engine.
///
/// Sources, layers and images are keyed by caller-chosen string ids; an image
/// registered once may be referenced by any number of layers.
pub trait MapEngine {
    /// Register a bitmap icon under `id` for reuse across layers.
    fn load_image(&mut self, id: &str, icon: &Icon) -> Result<(), MapError>;

    /// Create a named geometry source.
    fn add_source(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError>;

    /// Replace an existing source's geometry without recreating its layer.
    fn set_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError>;

    /// Create a symbol layer bound to an existing source.
    fn add_layer(&mut self, layer: SymbolLayer) -> Result<(), MapError>;

    /// Tear the engine down. Further mutations fail.
    fn remove(&mut self);
}
