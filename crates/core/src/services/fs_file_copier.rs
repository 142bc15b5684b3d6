//! File system copier
//!
//! Copies with `std::fs`, creating the destination directory first and
//! replacing an existing destination file.

use crate::interfaces::{CopyError, FileCopier};
use std::path::Path;

/// Default implementation of FileCopier using std::fs
#[derive(Debug, Default)]
pub struct FsFileCopier;

impl FsFileCopier {
    pub fn new() -> Self {
        Self
    }
}

impl FileCopier for FsFileCopier {
    fn copy(&self, src: &Path, dst: &Path) -> Result<(), CopyError> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = std::fs::copy(src, dst)?;
        tracing::debug!("Copied {} bytes from {:?} to {:?}", bytes, src, dst);
        Ok(())
    }
}
