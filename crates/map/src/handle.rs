use std::collections::BTreeSet;

use foundation::geo::LonLat;
use foundation::ids::ShipId;
use foundation::viewport::Viewport;
use ingest::Port;
use tracing::{debug, info};

use crate::engine::{Icon, MapEngine, MapEvent};
use crate::error::MapError;
use crate::feature::{Feature, FeatureCollection};
use crate::style::{PORT_TEXT_COLOR, SHIP_TEXT_COLOR, SymbolLayer};

pub const PORTS_ID: &str = "ports";
pub const PORT_ICON_ID: &str = "port-icon";
pub const SHIP_ICON_ID: &str = "ship-icon";

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub viewport: Viewport,
    pub style_url: String,
    /// Credential for the hosted style service. Comes from the environment;
    /// `None` is fine for a headless engine.
    pub access_token: Option<String>,
    pub port_icon: Icon,
    pub ship_icon: Icon,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            style_url: "mapbox://styles/mapbox/streets-v12".to_string(),
            access_token: None,
            port_icon: Icon::new("assets/port.png").with_size(25, 25),
            ship_icon: Icon::new("assets/ship.png"),
        }
    }
}

/// Owned handle over a rendering engine.
///
/// Created by [`Map::new`], torn down by [`Map::shutdown`]; all engine
/// mutation flows through it so the usage contract holds: nothing before
/// style-ready, the ports layer created at most once, one lazily created
/// layer per ship with in-place data updates afterwards, and each icon
/// loaded exactly once.
#[derive(Debug)]
pub struct Map<E: MapEngine> {
    engine: E,
    config: MapConfig,
    viewport: Viewport,
    style_ready: bool,
    ports_added: bool,
    ship_icon_loaded: bool,
    ship_layers: BTreeSet<ShipId>,
}

impl<E: MapEngine> Map<E> {
    pub fn new(config: MapConfig, engine: E) -> Self {
        let viewport = config.viewport;
        Self {
            engine,
            config,
            viewport,
            style_ready: false,
            ports_added: false,
            ship_icon_loaded: false,
            ship_layers: BTreeSet::new(),
        }
    }

    /// Feed one engine notification into the handle.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::StyleLoaded => {
                info!(style = %self.config.style_url, "map style ready");
                self.style_ready = true;
            }
            MapEvent::Moved(viewport) => {
                debug!(
                    lon = viewport.center.lon_deg,
                    lat = viewport.center.lat_deg,
                    zoom = viewport.zoom,
                    "viewport moved"
                );
                self.viewport = viewport;
            }
        }
    }

    pub fn style_ready(&self) -> bool {
        self.style_ready
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Create the static ports layer from the full dataset.
    ///
    /// The port icon is registered once and shared by every marker. Calling
    /// this again after the layer exists is a no-op.
    pub fn add_ports_layer(&mut self, ports: &[Port]) -> Result<(), MapError> {
        if !self.style_ready {
            return Err(MapError::StyleNotReady);
        }
        if self.ports_added {
            return Ok(());
        }

        self.engine.load_image(PORT_ICON_ID, &self.config.port_icon)?;
        let features = ports
            .iter()
            .map(|port| Feature::new(&port.name, port.position))
            .collect();
        self.engine
            .add_source(PORTS_ID, FeatureCollection::new(features))?;
        self.engine.add_layer(
            SymbolLayer::new(PORTS_ID, PORTS_ID, PORT_ICON_ID).with_text_color(PORT_TEXT_COLOR),
        )?;
        self.ports_added = true;
        info!(ports = ports.len(), "ports layer created");
        Ok(())
    }

    /// Move a ship's marker.
    ///
    /// The first call for a ship creates its source and layer (registering
    /// the shared ship icon if this is the first ship overall); later calls
    /// replace the single-feature source data in place.
    pub fn set_ship_position(&mut self, ship: &ShipId, position: LonLat) -> Result<(), MapError> {
        if !self.style_ready {
            return Err(MapError::StyleNotReady);
        }

        let data = FeatureCollection::single(Feature::new(ship.as_str(), position));
        if self.ship_layers.contains(ship) {
            return self.engine.set_source_data(ship.as_str(), data);
        }

        if !self.ship_icon_loaded {
            self.engine.load_image(SHIP_ICON_ID, &self.config.ship_icon)?;
            self.ship_icon_loaded = true;
        }
        self.engine.add_source(ship.as_str(), data)?;
        self.engine.add_layer(
            SymbolLayer::new(ship.as_str(), ship.as_str(), SHIP_ICON_ID)
                .with_text_color(SHIP_TEXT_COLOR),
        )?;
        self.ship_layers.insert(ship.clone());
        debug!(ship = %ship, "ship layer created");
        Ok(())
    }

    /// Tear the map down. Returns the spent engine so callers can inspect
    /// what it received.
    pub fn shutdown(mut self) -> E {
        self.engine.remove();
        info!("map removed");
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{EngineOp, RecordingEngine};
    use pretty_assertions::assert_eq;

    fn ready_map() -> Map<RecordingEngine> {
        let mut map = Map::new(MapConfig::default(), RecordingEngine::new());
        map.handle_event(MapEvent::StyleLoaded);
        map
    }

    fn ports() -> Vec<Port> {
        vec![
            Port {
                name: "X".to_string(),
                position: LonLat::new(72.5, 18.9),
            },
            Port {
                name: "Colombo".to_string(),
                position: LonLat::new(79.84, 6.95),
            },
        ]
    }

    #[test]
    fn mutation_before_style_ready_is_rejected() {
        let mut map = Map::new(MapConfig::default(), RecordingEngine::new());
        assert_eq!(map.add_ports_layer(&ports()), Err(MapError::StyleNotReady));
        assert_eq!(
            map.set_ship_position(&ShipId::from("A"), LonLat::new(0.0, 0.0)),
            Err(MapError::StyleNotReady)
        );
        assert!(map.engine().ops().is_empty());
    }

    #[test]
    fn ports_layer_holds_full_dataset() {
        let mut map = ready_map();
        map.add_ports_layer(&ports()).unwrap();

        let engine = map.engine();
        let data = engine.source_data(PORTS_ID).unwrap();
        assert_eq!(data.features.len(), 2);
        assert_eq!(data.features[0].name, "X");
        assert_eq!(data.features[0].position, LonLat::new(72.5, 18.9));

        let layer = engine.layer(PORTS_ID).unwrap();
        assert_eq!(layer.icon_image, PORT_ICON_ID);
        assert_eq!(layer.text_color, PORT_TEXT_COLOR);
    }

    #[test]
    fn ports_layer_is_created_once() {
        let mut map = ready_map();
        map.add_ports_layer(&ports()).unwrap();
        map.add_ports_layer(&ports()).unwrap();
        assert_eq!(map.engine().image_loads(PORT_ICON_ID), 1);
        assert_eq!(map.engine().layer_ids(), vec![PORTS_ID]);
    }

    #[test]
    fn port_icon_is_registered_with_decode_size() {
        let mut map = ready_map();
        map.add_ports_layer(&ports()).unwrap();
        let icon = map.engine().image(PORT_ICON_ID).unwrap();
        assert_eq!(icon.size_px, Some([25, 25]));
    }

    #[test]
    fn first_ship_position_creates_layer_lazily() {
        let mut map = ready_map();
        let ship = ShipId::from("MV Kestrel");
        map.set_ship_position(&ship, LonLat::new(72.5, 18.9)).unwrap();

        let engine = map.engine();
        assert_eq!(
            engine.ops(),
            &[
                EngineOp::LoadImage {
                    id: SHIP_ICON_ID.into()
                },
                EngineOp::AddSource {
                    id: "MV Kestrel".into()
                },
                EngineOp::AddLayer {
                    id: "MV Kestrel".into()
                },
            ]
        );
        assert_eq!(engine.layer(ship.as_str()).unwrap().text_color, SHIP_TEXT_COLOR);
    }

    #[test]
    fn later_positions_update_source_in_place() {
        let mut map = ready_map();
        let ship = ShipId::from("A");
        map.set_ship_position(&ship, LonLat::new(1.0, 1.0)).unwrap();
        map.set_ship_position(&ship, LonLat::new(2.0, 2.0)).unwrap();

        let engine = map.engine();
        assert_eq!(engine.layer_ids(), vec!["A"]);
        let data = engine.source_data("A").unwrap();
        assert_eq!(data.features.len(), 1);
        assert_eq!(data.features[0].position, LonLat::new(2.0, 2.0));
        assert_eq!(
            engine.ops().last(),
            Some(&EngineOp::SetSourceData { id: "A".into() })
        );
    }

    #[test]
    fn ship_icon_is_loaded_once_across_ships() {
        let mut map = ready_map();
        map.set_ship_position(&ShipId::from("A"), LonLat::new(1.0, 1.0))
            .unwrap();
        map.set_ship_position(&ShipId::from("B"), LonLat::new(2.0, 2.0))
            .unwrap();
        assert_eq!(map.engine().image_loads(SHIP_ICON_ID), 1);
    }

    #[test]
    fn moved_event_updates_viewport() {
        let mut map = ready_map();
        let viewport = Viewport::new(LonLat::new(10.0, 20.0), 4.0);
        map.handle_event(MapEvent::Moved(viewport));
        assert_eq!(map.viewport(), viewport);
    }

    #[test]
    fn shutdown_removes_the_engine() {
        let map = ready_map();
        let engine = map.shutdown();
        assert!(engine.is_removed());
        assert_eq!(engine.ops().last(), Some(&EngineOp::Remove));
    }
}
