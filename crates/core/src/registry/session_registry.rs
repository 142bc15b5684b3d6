use crate::{
    error::{Error, Result},
    types::{BuildIdentity, BuildSession, SessionId},
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE_NAME: &str = "build_log.txt";

/// Arena of build sessions plus their display order.
///
/// Sessions are never removed, so a [`SessionId`] stays valid for the lifetime
/// of the registry. The display order is most-recently-raised first.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Vec<BuildSession>,
    order: Vec<SessionId>,
    by_identity: HashMap<BuildIdentity, SessionId>,
    logs_dir: PathBuf,
    log_file_name: String,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(PathBuf::from("logs"), DEFAULT_LOG_FILE_NAME)
    }
}

impl SessionRegistry {
    pub fn new(logs_dir: PathBuf, log_file_name: impl Into<String>) -> Self {
        Self {
            sessions: Vec::new(),
            order: Vec::new(),
            by_identity: HashMap::new(),
            logs_dir,
            log_file_name: log_file_name.into(),
        }
    }

    /// Rebuild a registry from sessions listed front-to-back.
    ///
    /// A session whose identity already appeared earlier in the list is dropped.
    pub fn from_sessions(
        logs_dir: PathBuf,
        log_file_name: impl Into<String>,
        sessions: Vec<BuildSession>,
    ) -> Self {
        let mut registry = Self::new(logs_dir, log_file_name);

        for session in sessions {
            if registry.by_identity.contains_key(session.identity()) {
                tracing::debug!("Dropping duplicate session for {}", session.identity());
                continue;
            }
            let id = SessionId(registry.sessions.len());
            registry.by_identity.insert(session.identity().clone(), id);
            registry.sessions.push(session);
            registry.order.push(id);
        }

        registry
    }

    /// Where the log for `identity` is written
    pub fn log_path_for(&self, identity: &BuildIdentity) -> PathBuf {
        self.logs_dir
            .join(identity.logs_dir_name())
            .join(&self.log_file_name)
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Return the session for `identity`, creating and raising a new running one if absent
    pub fn get_or_create(&mut self, identity: BuildIdentity) -> SessionId {
        if let Some(&id) = self.by_identity.get(&identity) {
            return id;
        }

        let log_path = self.log_path_for(&identity);
        let id = SessionId(self.sessions.len());

        tracing::debug!("Creating build session for {} (log: {:?})", identity, log_path);

        self.by_identity.insert(identity.clone(), id);
        self.sessions.push(BuildSession::new(identity, log_path));
        self.order.push(id);

        // Freshly created, so it is always present
        let _ = self.raise(id);
        id
    }

    /// Move `id` to the front of the display order
    pub fn raise(&mut self, id: SessionId) -> Result<()> {
        let position = self
            .order
            .iter()
            .position(|&candidate| candidate == id)
            .ok_or(Error::NotRegistered)?;

        let id = self.order.remove(position);
        self.order.insert(0, id);

        tracing::debug!("Raised session {:?} from position {}", id, position);
        Ok(())
    }

    /// Sessions in display order, front to back
    pub fn all(&self) -> Vec<&BuildSession> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildSession> {
        self.order.iter().map(|id| &self.sessions[id.0])
    }

    pub fn find(&self, identity: &BuildIdentity) -> Option<SessionId> {
        self.by_identity.get(identity).copied()
    }

    pub fn get(&self, id: SessionId) -> Option<&BuildSession> {
        self.sessions.get(id.0)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut BuildSession> {
        self.sessions.get_mut(id.0)
    }

    /// Session shown at `index` in display order
    pub fn at(&self, index: usize) -> Option<&BuildSession> {
        self.id_at(index).and_then(|id| self.get(id))
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut BuildSession> {
        let id = self.id_at(index)?;
        self.get_mut(id)
    }

    pub fn id_at(&self, index: usize) -> Option<SessionId> {
        self.order.get(index).copied()
    }

    pub fn index_of(&self, id: SessionId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuildStatus;

    fn identity(solution: &str, configuration: &str) -> BuildIdentity {
        BuildIdentity::new(solution, configuration)
    }

    fn labels(registry: &SessionRegistry) -> Vec<String> {
        registry
            .iter()
            .map(|s| s.identity().display_label())
            .collect()
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut registry = SessionRegistry::default();

        let first = registry.get_or_create(identity("/p/Game.sln", "Debug"));
        let second = registry.get_or_create(identity("/p/Game.sln", "Debug"));

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_identities_get_distinct_sessions() {
        let mut registry = SessionRegistry::default();

        let debug = registry.get_or_create(identity("/p/Game.sln", "Debug"));
        let release = registry.get_or_create(identity("/p/Game.sln", "Release"));
        let other = registry.get_or_create(identity("/p/Tools.sln", "Debug"));

        assert_ne!(debug, release);
        assert_ne!(debug, other);
        assert_ne!(release, other);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_new_session_is_running_and_in_front() {
        let mut registry = SessionRegistry::default();
        registry.get_or_create(identity("/p/A.sln", "Debug"));
        let id = registry.get_or_create(identity("/p/B.sln", "Debug"));

        assert_eq!(registry.index_of(id), Some(0));
        assert_eq!(registry.at(0).unwrap().status(), BuildStatus::Running);
        assert_eq!(labels(&registry), vec!["B [Debug]", "A [Debug]"]);
    }

    #[test]
    fn test_raise_preserves_relative_order_of_others() {
        let mut registry = SessionRegistry::default();
        let a = registry.get_or_create(identity("/p/A.sln", "Debug"));
        registry.get_or_create(identity("/p/B.sln", "Debug"));
        registry.get_or_create(identity("/p/C.sln", "Debug"));
        registry.get_or_create(identity("/p/D.sln", "Debug"));
        assert_eq!(
            labels(&registry),
            vec!["D [Debug]", "C [Debug]", "B [Debug]", "A [Debug]"]
        );

        registry.raise(a).unwrap();

        assert_eq!(
            labels(&registry),
            vec!["A [Debug]", "D [Debug]", "C [Debug]", "B [Debug]"]
        );
    }

    #[test]
    fn test_raise_front_session_is_stable() {
        let mut registry = SessionRegistry::default();
        registry.get_or_create(identity("/p/A.sln", "Debug"));
        let b = registry.get_or_create(identity("/p/B.sln", "Debug"));

        registry.raise(b).unwrap();

        assert_eq!(labels(&registry), vec!["B [Debug]", "A [Debug]"]);
    }

    #[test]
    fn test_raise_unknown_session_fails() {
        let mut registry = SessionRegistry::default();
        let mut other = SessionRegistry::default();
        other.get_or_create(identity("/p/A.sln", "Debug"));
        let foreign = other.get_or_create(identity("/p/B.sln", "Debug"));

        let err = registry.raise(foreign).unwrap_err();
        assert!(matches!(err, Error::NotRegistered));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_log_path_is_derived_from_identity() {
        let mut registry = SessionRegistry::new(PathBuf::from("/tmp/logs"), "msbuild_log.txt");
        let id = registry.get_or_create(identity("/p/Game.sln", "Debug"));
        let session = registry.get(id).unwrap();

        let expected = PathBuf::from("/tmp/logs")
            .join(session.identity().logs_dir_name())
            .join("msbuild_log.txt");
        assert_eq!(session.log_path(), expected.as_path());
    }

    #[test]
    fn test_log_path_stays_under_logs_dir() {
        let registry = SessionRegistry::new(PathBuf::from("/tmp/logs"), "build_log.txt");

        let path = registry.log_path_for(&identity("/p/Game.sln", "../../etc"));

        let dir = path.parent().unwrap();
        assert_eq!(dir.parent(), Some(Path::new("/tmp/logs")));
        assert!(!path.components().any(|c| c == std::path::Component::ParentDir));
    }

    #[test]
    fn test_from_sessions_keeps_order_and_drops_duplicates() {
        let logs = PathBuf::from("logs");
        let a = BuildSession::new(identity("/p/A.sln", "Debug"), logs.join("a"));
        let b = BuildSession::new(identity("/p/B.sln", "Debug"), logs.join("b"));
        let a_again = BuildSession::new(identity("/p/A.sln", "Debug"), logs.join("a2"));

        let registry = SessionRegistry::from_sessions(logs, "log.txt", vec![a, b, a_again]);

        assert_eq!(labels(&registry), vec!["A [Debug]", "B [Debug]"]);
        assert_eq!(registry.at(0).unwrap().log_path(), Path::new("logs/a"));
    }
}
