#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Source/layer mutation attempted before the engine reported its style
    /// ready.
    StyleNotReady,
    UnknownSource(String),
    DuplicateSource(String),
    DuplicateLayer(String),
    Engine(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::StyleNotReady => write!(f, "map style is not ready yet"),
            MapError::UnknownSource(id) => write!(f, "no such source: {id:?}"),
            MapError::DuplicateSource(id) => write!(f, "source already exists: {id:?}"),
            MapError::DuplicateLayer(id) => write!(f, "layer already exists: {id:?}"),
            MapError::Engine(msg) => write!(f, "map engine error: {msg}"),
        }
    }
}

impl std::error::Error for MapError {}
