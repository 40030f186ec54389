use std::collections::BTreeMap;

use tracing::debug;

use crate::engine::{Icon, MapEngine};
use crate::error::MapError;
use crate::feature::FeatureCollection;
use crate::style::SymbolLayer;

/// One recorded engine mutation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOp {
    LoadImage { id: String },
    AddSource { id: String },
    SetSourceData { id: String },
    AddLayer { id: String },
    Remove,
}

/// In-memory [`MapEngine`] that records every operation and keeps the current
/// data of every source.
///
/// Stands in for the real rendering engine in tests and headless runs:
/// callers observe exactly the mutations a real engine would have received.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    ops: Vec<EngineOp>,
    images: BTreeMap<String, Icon>,
    sources: BTreeMap<String, FeatureCollection>,
    layers: BTreeMap<String, SymbolLayer>,
    removed: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[EngineOp] {
        &self.ops
    }

    pub fn has_image(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }

    pub fn image(&self, id: &str) -> Option<&Icon> {
        self.images.get(id)
    }

    /// How many times an image id was (re)loaded.
    pub fn image_loads(&self, id: &str) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, EngineOp::LoadImage { id: loaded } if loaded == id))
            .count()
    }

    pub fn source_data(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&SymbolLayer> {
        self.layers.get(id)
    }

    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.keys().map(String::as_str).collect()
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    fn check_alive(&self) -> Result<(), MapError> {
        if self.removed {
            return Err(MapError::Engine("engine has been removed".to_string()));
        }
        Ok(())
    }
}

impl MapEngine for RecordingEngine {
    fn load_image(&mut self, id: &str, icon: &Icon) -> Result<(), MapError> {
        self.check_alive()?;
        debug!(id, path = %icon.path.display(), "load image");
        self.ops.push(EngineOp::LoadImage { id: id.to_string() });
        self.images.insert(id.to_string(), icon.clone());
        Ok(())
    }

    fn add_source(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError> {
        self.check_alive()?;
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_string()));
        }
        debug!(id, features = data.features.len(), "add source");
        self.ops.push(EngineOp::AddSource { id: id.to_string() });
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError> {
        self.check_alive()?;
        let Some(slot) = self.sources.get_mut(id) else {
            return Err(MapError::UnknownSource(id.to_string()));
        };
        debug!(id, "set source data");
        self.ops.push(EngineOp::SetSourceData { id: id.to_string() });
        *slot = data;
        Ok(())
    }

    fn add_layer(&mut self, layer: SymbolLayer) -> Result<(), MapError> {
        self.check_alive()?;
        if !self.sources.contains_key(&layer.source) {
            return Err(MapError::UnknownSource(layer.source.clone()));
        }
        if self.layers.contains_key(&layer.id) {
            return Err(MapError::DuplicateLayer(layer.id.clone()));
        }
        debug!(id = %layer.id, source = %layer.source, "add layer");
        self.ops.push(EngineOp::AddLayer {
            id: layer.id.clone(),
        });
        self.layers.insert(layer.id.clone(), layer);
        Ok(())
    }

    fn remove(&mut self) {
        debug!("remove engine");
        self.ops.push(EngineOp::Remove);
        self.removed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;
    use foundation::geo::LonLat;

    fn point(name: &str) -> FeatureCollection {
        FeatureCollection::single(Feature::new(name, LonLat::new(0.0, 0.0)))
    }

    #[test]
    fn records_ops_in_call_order() {
        let mut engine = RecordingEngine::new();
        engine.load_image("port-icon", &Icon::new("port.png")).unwrap();
        engine.add_source("ports", point("X")).unwrap();
        engine
            .add_layer(SymbolLayer::new("ports", "ports", "port-icon"))
            .unwrap();

        assert_eq!(
            engine.ops(),
            &[
                EngineOp::LoadImage {
                    id: "port-icon".into()
                },
                EngineOp::AddSource { id: "ports".into() },
                EngineOp::AddLayer { id: "ports".into() },
            ]
        );
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let mut engine = RecordingEngine::new();
        engine.add_source("ports", point("X")).unwrap();
        let err = engine.add_source("ports", point("X")).unwrap_err();
        assert_eq!(err, MapError::DuplicateSource("ports".into()));
    }

    #[test]
    fn set_data_requires_existing_source() {
        let mut engine = RecordingEngine::new();
        let err = engine.set_source_data("ghost", point("X")).unwrap_err();
        assert_eq!(err, MapError::UnknownSource("ghost".into()));
    }

    #[test]
    fn layer_requires_its_source() {
        let mut engine = RecordingEngine::new();
        let err = engine
            .add_layer(SymbolLayer::new("ports", "ports", "port-icon"))
            .unwrap_err();
        assert_eq!(err, MapError::UnknownSource("ports".into()));
    }

    #[test]
    fn set_data_replaces_in_place() {
        let mut engine = RecordingEngine::new();
        engine.add_source("a", point("first")).unwrap();
        engine.set_source_data("a", point("second")).unwrap();
        let data = engine.source_data("a").unwrap();
        assert_eq!(data.features[0].name, "second");
    }

    #[test]
    fn removed_engine_rejects_mutation() {
        let mut engine = RecordingEngine::new();
        engine.remove();
        assert!(engine.is_removed());
        let err = engine.add_source("ports", point("X")).unwrap_err();
        assert!(matches!(err, MapError::Engine(_)));
    }
}
