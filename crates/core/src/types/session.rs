use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{BuildIdentity, BuildIssue, BuildStatus};

/// Stable handle to a session stored in a [`SessionRegistry`](crate::registry::SessionRegistry).
///
/// Handles are never reused within one registry, so two equal handles always
/// refer to the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) usize);

impl SessionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One tracked build for a (solution, configuration) pair and the outcome of its latest attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSession {
    identity: BuildIdentity,
    status: BuildStatus,
    error_count: usize,
    warning_count: usize,
    log_path: PathBuf,
    #[serde(default = "default_visible")]
    warnings_visible: bool,
    #[serde(default = "default_visible")]
    errors_visible: bool,
    #[serde(default)]
    issues: Vec<BuildIssue>,
    #[serde(default = "default_attempt")]
    attempt: u32,
}

fn default_visible() -> bool {
    true
}

fn default_attempt() -> u32 {
    1
}

impl BuildSession {
    /// Create a session whose first attempt is running
    pub fn new(identity: BuildIdentity, log_path: PathBuf) -> Self {
        Self {
            identity,
            status: BuildStatus::Running,
            error_count: 0,
            warning_count: 0,
            log_path,
            warnings_visible: true,
            errors_visible: true,
            issues: Vec::new(),
            attempt: 1,
        }
    }

    pub fn identity(&self) -> &BuildIdentity {
        &self.identity
    }

    pub fn status(&self) -> BuildStatus {
        self.status
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn warnings_visible(&self) -> bool {
        self.warnings_visible
    }

    pub fn errors_visible(&self) -> bool {
        self.errors_visible
    }

    pub fn issues(&self) -> &[BuildIssue] {
        &self.issues
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn is_running(&self) -> bool {
        self.status == BuildStatus::Running
    }

    pub fn set_warnings_visible(&mut self, visible: bool) {
        self.warnings_visible = visible;
    }

    pub fn set_errors_visible(&mut self, visible: bool) {
        self.errors_visible = visible;
    }

    /// Start a new attempt on a session whose previous attempt has finished.
    ///
    /// Counts and issues belong to an attempt and are cleared; the log path and
    /// the visibility toggles belong to the session and are kept.
    pub fn begin_attempt(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(Error::SessionStillRunning);
        }

        self.attempt += 1;
        self.status = BuildStatus::Running;
        self.error_count = 0;
        self.warning_count = 0;
        self.issues.clear();

        tracing::debug!("Started attempt {} for {}", self.attempt, self.identity);
        Ok(())
    }

    /// Record the outcome of the running attempt.
    ///
    /// The status moves from `Running` to `Succeeded` or `Errored` once; a second
    /// call for the same attempt is rejected and leaves the session untouched.
    pub fn finish(
        &mut self,
        succeeded: bool,
        error_count: usize,
        warning_count: usize,
        issues: Vec<BuildIssue>,
    ) -> Result<()> {
        if !self.is_running() {
            return Err(Error::AttemptAlreadyFinished);
        }

        self.status = if succeeded {
            BuildStatus::Succeeded
        } else {
            BuildStatus::Errored
        };
        self.error_count = error_count;
        self.warning_count = warning_count;
        self.issues = issues;

        tracing::debug!(
            "{} finished attempt {}: {} ({} errors, {} warnings)",
            self.identity,
            self.attempt,
            self.status,
            self.error_count,
            self.warning_count
        );
        Ok(())
    }

    /// Mark an attempt that can no longer complete (e.g. the host stopped mid-build) as errored
    pub(crate) fn abandon(&mut self) {
        if self.is_running() {
            self.status = BuildStatus::Errored;
        }
    }
}
