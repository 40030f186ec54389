#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// A latitude/longitude/heading cell did not parse as a number.
    InvalidNumber {
        ship: String,
        field: &'static str,
        value: String,
    },
    /// A timestamp cell matched none of the accepted formats.
    InvalidTimestamp { ship: String, value: String },
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::InvalidNumber { ship, field, value } => {
                write!(f, "ship {ship:?}: {field} is not a number: {value:?}")
            }
            TrackError::InvalidTimestamp { ship, value } => {
                write!(f, "ship {ship:?}: unrecognized timestamp: {value:?}")
            }
        }
    }
}

impl std::error::Error for TrackError {}
