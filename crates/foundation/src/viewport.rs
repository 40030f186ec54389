use crate::geo::LonLat;

/// Map camera state: center coordinate and zoom level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub center: LonLat,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: LonLat, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for Viewport {
    // Initial camera of the shipping view: Indian Ocean, whole-region zoom.
    fn default() -> Self {
        Self {
            center: LonLat::new(82.0, 21.0),
            zoom: 2.5,
        }
    }
}
