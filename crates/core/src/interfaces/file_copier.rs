use std::fmt;
use std::path::Path;

/// Reason a copy did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyError {
    pub message: String,
}

impl CopyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<std::io::Error> for CopyError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Trait for duplicating a file to a second location
pub trait FileCopier: Send + Sync {
    fn copy(&self, src: &Path, dst: &Path) -> Result<(), CopyError>;
}
