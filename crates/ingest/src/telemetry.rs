use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::IngestError;

/// One row of the seven-day ship telemetry dataset, raw cells keyed by
/// header name. Numeric and timestamp conversion happens in the track
/// builder so a bad cell can name the ship it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryRow {
    pub site_name: String,
    pub location_latitude: String,
    pub location_longitude: String,
    pub heading: String,
    pub ec_timestamp: String,
}

pub fn read_telemetry(path: &Path) -> Result<Vec<TelemetryRow>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::Io(format!("{}: {e}", path.display())))?;
    let rows = telemetry_from_reader(file)?;
    if rows.is_empty() {
        warn!(path = %path.display(), "telemetry dataset has no rows");
    }
    info!(rows = rows.len(), path = %path.display(), "loaded ship telemetry");
    Ok(rows)
}

fn telemetry_from_reader(rdr: impl Read) -> Result<Vec<TelemetryRow>, IngestError> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader
        .deserialize()
        .map(|row| row.map_err(|e| IngestError::Csv(e.to_string())))
        .collect()
}
