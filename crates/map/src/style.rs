use serde::Serialize;

pub const PORT_TEXT_COLOR: &str = "#007cbf";
pub const SHIP_TEXT_COLOR: &str = "#ff0000";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Top,
    Bottom,
    Center,
}

/// Styling of one symbol layer: an icon per feature with the feature's name
/// drawn beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolLayer {
    pub id: String,
    pub source: String,
    pub icon_image: String,
    pub icon_allow_overlap: bool,
    pub text_color: String,
    pub text_offset: [f64; 2],
    pub text_anchor: TextAnchor,
}

impl SymbolLayer {
    /// Markers overlap freely and carry their label just below the icon.
    pub fn new(id: impl Into<String>, source: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            icon_image: icon.into(),
            icon_allow_overlap: true,
            text_color: "#000000".to_string(),
            text_offset: [0.0, 1.0],
            text_anchor: TextAnchor::Top,
        }
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }
}
