pub mod identity;
pub mod issue;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal or in-progress state of a build attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Running,
    Succeeded,
    Errored,
}

impl BuildStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, BuildStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildStatus::Running => "Running",
            BuildStatus::Succeeded => "Succeeded",
            BuildStatus::Errored => "Errored",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Re-export commonly used types
pub use identity::BuildIdentity;
pub use issue::{BuildIssue, IssueKind};
pub use session::{BuildSession, SessionId};
