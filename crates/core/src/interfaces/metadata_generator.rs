use std::path::{Path, PathBuf};

/// Trait for producing the scripts metadata artifact before a build
pub trait MetadataGenerator: Send + Sync {
    /// Describe the scripts of `project` into `output`.
    ///
    /// Returns the path of the produced artifact, or `None` when nothing was written.
    fn generate(&self, project: &Path, output: &Path) -> Option<PathBuf>;
}
