//! CSV ingestion for the two viewer datasets.
//!
//! Rows come out as raw, string-valued records bound by header name; typed
//! parsing happens downstream (ports here via [`Port::from_row`], telemetry
//! in the `track` crate). Read and decode failures are explicit
//! [`IngestError`] values rather than silently malformed rows.

pub mod error;
pub mod port;
pub mod telemetry;

pub use error::IngestError;
pub use port::{Port, PortRow, read_port_rows, read_ports};
pub use telemetry::{TelemetryRow, read_telemetry};
