#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    Io(String),
    Csv(String),
    /// A port cell that must be numeric did not parse.
    InvalidCoordinate {
        port: String,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(msg) => write!(f, "dataset read failed: {msg}"),
            IngestError::Csv(msg) => write!(f, "dataset decode failed: {msg}"),
            IngestError::InvalidCoordinate { port, field, value } => {
                write!(f, "port {port:?}: {field} is not a number: {value:?}")
            }
        }
    }
}

impl std::error::Error for IngestError {}
