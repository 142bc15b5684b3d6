use std::path::Path;

use crate::error::Result;

/// Trait for showing a build log to the user
pub trait LogViewer: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}
