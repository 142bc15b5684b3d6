use buildpanel_core::interfaces::LogViewer;
use buildpanel_core::{Error, Result};
use std::io::Write;
use std::path::Path;

use crate::utils::read_lossy;

/// Opens logs with the system's default application
pub struct SystemLogViewer;

impl LogViewer for SystemLogViewer {
    fn open(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::LogViewer(format!(
                "Log file does not exist: {}",
                path.display()
            )));
        }
        open::that(path)
            .map_err(|e| Error::LogViewer(format!("Failed to open {}: {}", path.display(), e)))
    }
}

/// Prints logs to stdout
pub struct PrintLogViewer;

impl LogViewer for PrintLogViewer {
    fn open(&self, path: &Path) -> Result<()> {
        let contents = read_lossy(path)
            .map_err(|e| Error::LogViewer(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
