use crate::{
    error::{Error, Result},
    registry::SessionRegistry,
    types::BuildSession,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const STORE_VERSION: u32 = 1;

/// Saves and restores the registry as a JSON file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSessions {
    version: u32,
    /// Front-to-back display order
    sessions: Vec<BuildSession>,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, registry: &SessionRegistry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stored = StoredSessions {
            version: STORE_VERSION,
            sessions: registry.iter().cloned().collect(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, contents)?;

        tracing::debug!("Saved {} sessions to {:?}", stored.sessions.len(), self.path);
        Ok(())
    }

    /// Load the saved registry, or an empty one when nothing was saved yet.
    ///
    /// A session saved while its build was still running can never finish and
    /// is restored as errored.
    pub fn load(&self, logs_dir: PathBuf, log_file_name: &str) -> Result<SessionRegistry> {
        if !self.path.exists() {
            return Ok(SessionRegistry::new(logs_dir, log_file_name));
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let stored: StoredSessions = serde_json::from_str(&contents)?;
        if stored.version != STORE_VERSION {
            return Err(Error::ConfigError(format!(
                "Unsupported session store version {} in {}",
                stored.version,
                self.path.display()
            )));
        }

        let sessions = stored
            .sessions
            .into_iter()
            .map(|mut session| {
                if session.is_running() {
                    tracing::debug!("Abandoning interrupted build for {}", session.identity());
                    session.abandon();
                }
                session
            })
            .collect();

        Ok(SessionRegistry::from_sessions(logs_dir, log_file_name, sessions))
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
