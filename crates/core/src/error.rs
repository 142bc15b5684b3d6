use std::io;

/// Errors that can occur during buildpanel operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Build session is not registered")]
    NotRegistered,

    #[error("Summary index {index} is out of range (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Failed to copy scripts metadata file: {0}")]
    MetadataCopyFailed(String),

    #[error("No build session selected")]
    NoSessionSelected,

    #[error("Expected 1 selected summary entry, got {selected}")]
    InvalidSelection { selected: usize },

    #[error("A build is already in progress")]
    BuildInProgress,

    #[error("Build session is still running")]
    SessionStillRunning,

    #[error("Build attempt has already finished")]
    AttemptAlreadyFinished,

    #[error("Compiler error: {0}")]
    Compiler(String),

    #[error("Failed to open log: {0}")]
    LogViewer(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for buildpanel operations
pub type Result<T> = std::result::Result<T, Error>;
