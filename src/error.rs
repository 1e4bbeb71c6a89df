use thiserror::Error;

/// Unified error type for bumper operations
#[derive(Error, Debug)]
pub enum BumperError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Revision lookup failed: {0}")]
    Revision(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tracker request failed: {0}")]
    Tracker(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot decode tracker response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bumper
pub type Result<T> = std::result::Result<T, BumperError>;

impl BumperError {
    /// Create a revision error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        BumperError::Revision(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumperError::Config(msg.into())
    }

    /// Create a tracker error with context
    pub fn tracker(msg: impl Into<String>) -> Self {
        BumperError::Tracker(msg.into())
    }
}
