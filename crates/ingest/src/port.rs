use std::fs::File;
use std::io::Read;
use std::path::Path;

use foundation::geo::LonLat;
use serde::Deserialize;
use tracing::info;

use crate::error::IngestError;

/// One row of the port dataset, raw cells keyed by header name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortRow {
    pub port_name: String,
    pub geo_location_longitude: String,
    pub geo_location_latitude: String,
}

/// A port marker: name plus parsed position.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub name: String,
    pub position: LonLat,
}

impl Port {
    pub fn from_row(row: &PortRow) -> Result<Self, IngestError> {
        let lon = parse_coordinate(row, "geo_location_longitude", &row.geo_location_longitude)?;
        let lat = parse_coordinate(row, "geo_location_latitude", &row.geo_location_latitude)?;
        Ok(Port {
            name: row.port_name.clone(),
            position: LonLat::new(lon, lat),
        })
    }
}

fn parse_coordinate(row: &PortRow, field: &'static str, value: &str) -> Result<f64, IngestError> {
    value
        .trim()
        .parse()
        .map_err(|_| IngestError::InvalidCoordinate {
            port: row.port_name.clone(),
            field,
            value: value.to_string(),
        })
}

pub fn read_port_rows(path: &Path) -> Result<Vec<PortRow>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::Io(format!("{}: {e}", path.display())))?;
    let rows = port_rows_from_reader(file)?;
    info!(rows = rows.len(), path = %path.display(), "loaded port dataset");
    Ok(rows)
}

/// Reads and type-converts the port dataset in one step.
pub fn read_ports(path: &Path) -> Result<Vec<Port>, IngestError> {
    read_port_rows(path)?.iter().map(Port::from_row).collect()
}

fn port_rows_from_reader(rdr: impl Read) -> Result<Vec<PortRow>, IngestError> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader
        .deserialize()
        .map(|row| row.map_err(|e| IngestError::Csv(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PORTS_CSV: &str = "\
port_name,geo_location_longitude,geo_location_latitude
X,72.5,18.9
Colombo,79.84,6.95
";

    #[test]
    fn binds_cells_by_header_name() {
        let rows = port_rows_from_reader(PORTS_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].port_name, "X");
        assert_eq!(rows[0].geo_location_longitude, "72.5");
        assert_eq!(rows[0].geo_location_latitude, "18.9");
    }

    #[test]
    fn port_marker_gets_parsed_position_and_label() {
        let rows = port_rows_from_reader(PORTS_CSV.as_bytes()).unwrap();
        let port = Port::from_row(&rows[0]).unwrap();
        assert_eq!(port.name, "X");
        assert_eq!(port.position, LonLat::new(72.5, 18.9));
    }

    #[test]
    fn bad_coordinate_is_an_explicit_error() {
        let csv = "port_name,geo_location_longitude,geo_location_latitude\nX,east,18.9\n";
        let rows = port_rows_from_reader(csv.as_bytes()).unwrap();
        let err = Port::from_row(&rows[0]).unwrap_err();
        assert_eq!(
            err,
            IngestError::InvalidCoordinate {
                port: "X".into(),
                field: "geo_location_longitude",
                value: "east".into(),
            }
        );
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("port_geo_location.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(PORTS_CSV.as_bytes()).unwrap();

        let ports = read_ports(&path).unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[1].name, "Colombo");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_ports(Path::new("no/such/ports.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
