use thiserror::Error;

/// Result type for valet-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the workflow layer
#[derive(Error, Debug)]
pub enum Error {
    /// Record store error
    #[error(transparent)]
    Index(#[from] valet_index::Error),

    /// Attendant-supplied text could not be accepted (date bounds, plate text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation or state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// True for validation failures, which are reported before anything is written.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::InvalidInput(_) => true,
            Error::Index(err) => err.is_invalid_input(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
