use foundation::geo::LonLat;
use serde_json::{Value, json};

/// A named point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub position: LonLat,
}

impl Feature {
    pub fn new(name: impl Into<String>, position: LonLat) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Geometry payload of a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// The moving-marker shape: a collection holding exactly one feature.
    pub fn single(feature: Feature) -> Self {
        Self {
            features: vec![feature],
        }
    }

    /// GeoJSON rendition, as handed to the engine boundary.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self
                .features
                .iter()
                .map(|f| {
                    json!({
                        "type": "Feature",
                        "geometry": {
                            "type": "Point",
                            "coordinates": f.position.to_coordinates(),
                        },
                        "properties": { "name": f.name },
                    })
                })
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn geojson_shape() {
        let fc = FeatureCollection::single(Feature::new("X", LonLat::new(72.5, 18.9)));
        assert_eq!(
            fc.to_geojson(),
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [72.5, 18.9] },
                    "properties": { "name": "X" },
                }],
            })
        );
    }
}
