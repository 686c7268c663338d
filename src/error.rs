use thiserror::Error;

/// Main error type for the simulator
#[derive(Error, Debug)]
pub enum TrackSimError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Unknown policy selector: {0}")]
    UnknownPolicy(u32),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup write failed for {path}: {source}")]
    Backup {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for TrackSimError
pub type Result<T> = std::result::Result<T, TrackSimError>;

impl TrackSimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TrackSimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
