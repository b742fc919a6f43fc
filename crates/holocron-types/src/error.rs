use std::fmt;

/// Result type for holocron operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the catalog
#[derive(Debug)]
pub enum Error {
    /// Transport failed before a response arrived
    Http(String),

    /// Server answered with a non-success status
    Status { status: u16, url: String },

    /// No record for the requested identifier
    NotFound(String),

    /// Response body did not match the expected shape
    Decode(serde_json::Error),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// Decode error for a payload that parsed but can't be used
    pub fn malformed(msg: impl fmt::Display) -> Self {
        Error::Decode(<serde_json::Error as serde::de::Error>::custom(msg))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(msg) => write!(f, "HTTP error: {}", msg),
            Error::Status { status, url } => write!(f, "Unexpected status {} from {}", status, url),
            Error::NotFound(id) => write!(f, "Film not found: {}", id),
            Error::Decode(err) => write!(f, "Malformed catalog response: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http(_) | Error::Status { .. } | Error::NotFound(_) | Error::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
