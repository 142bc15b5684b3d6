//! Compiler interface
//!
//! Performs the actual compilation of a solution for one configuration.

use std::path::PathBuf;

use crate::{
    error::Result,
    types::{BuildIdentity, BuildIssue},
};

/// Everything a compiler needs to know to build one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub identity: BuildIdentity,
    /// Project descriptor the solution builds (e.g. a `.csproj`)
    pub project: PathBuf,
    /// Where the textual build log is expected to be written
    pub log_path: PathBuf,
}

impl BuildRequest {
    pub fn configuration(&self) -> &str {
        &self.identity.configuration
    }
}

/// Result reported by a compiler once a build attempt concludes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutcome {
    pub success: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub log_path: Option<PathBuf>,
    pub issues: Vec<BuildIssue>,
}

impl CompileOutcome {
    pub fn succeeded(warning_count: usize) -> Self {
        Self {
            success: true,
            warning_count,
            ..Default::default()
        }
    }

    pub fn failed(error_count: usize, warning_count: usize) -> Self {
        Self {
            success: false,
            error_count,
            warning_count,
            ..Default::default()
        }
    }

    pub fn with_issues(mut self, issues: Vec<BuildIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_log_path(mut self, log_path: PathBuf) -> Self {
        self.log_path = Some(log_path);
        self
    }
}

/// Trait for the external build tool
pub trait Compiler: Send + Sync {
    /// Build and block until the attempt concludes.
    ///
    /// `Ok` carries the outcome of a build that ran (successfully or not);
    /// `Err` means the build could not be run at all.
    fn build_blocking(&self, request: &BuildRequest) -> Result<CompileOutcome>;
}
