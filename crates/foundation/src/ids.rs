/// Ship identifier as it appears in the telemetry dataset.
///
/// Also doubles as the map source/layer key for that ship's marker.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub String);

impl ShipId {
    pub fn new(id: impl Into<String>) -> Self {
        ShipId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShipId {
    fn from(id: &str) -> Self {
        ShipId(id.to_string())
    }
}
