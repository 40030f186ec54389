use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use foundation::geo::LonLat;
use foundation::ids::ShipId;
use ingest::TelemetryRow;

use crate::{Sample, Track, TrackError, TrackSet};

// Timestamp layout of the telemetry export when it is not RFC 3339.
const TELEMETRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Groups telemetry rows by ship id and sorts each group by timestamp.
///
/// Single pass over the rows; every ship id that appears in the input ends up
/// as a key of the result, and no row is dropped. A cell that fails to parse
/// aborts the build with an error naming the ship and value.
pub fn build_tracks(rows: &[TelemetryRow]) -> Result<TrackSet, TrackError> {
    let mut grouped: BTreeMap<ShipId, Vec<Sample>> = BTreeMap::new();

    for row in rows {
        let sample = sample_from_row(row)?;
        grouped
            .entry(ShipId::new(row.site_name.clone()))
            .or_default()
            .push(sample);
    }

    let mut tracks = TrackSet::new();
    for (ship, samples) in grouped {
        if let Some(track) = Track::new(samples) {
            tracks.insert(ship, track);
        }
    }
    Ok(tracks)
}

fn sample_from_row(row: &TelemetryRow) -> Result<Sample, TrackError> {
    let lat = parse_number(row, "location_latitude", &row.location_latitude)?;
    let lon = parse_number(row, "location_longitude", &row.location_longitude)?;
    let heading_deg = parse_number(row, "heading", &row.heading)?;
    let timestamp = parse_timestamp(row)?;
    Ok(Sample {
        position: LonLat::new(lon, lat),
        heading_deg,
        timestamp,
    })
}

fn parse_number(row: &TelemetryRow, field: &'static str, value: &str) -> Result<f64, TrackError> {
    value.trim().parse().map_err(|_| TrackError::InvalidNumber {
        ship: row.site_name.clone(),
        field,
        value: value.to_string(),
    })
}

fn parse_timestamp(row: &TelemetryRow) -> Result<DateTime<Utc>, TrackError> {
    let value = row.ec_timestamp.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    // Fallback: the export's plain layout, assumed UTC.
    NaiveDateTime::parse_from_str(value, TELEMETRY_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TrackError::InvalidTimestamp {
            ship: row.site_name.clone(),
            value: value.to_string(),
        })
}
