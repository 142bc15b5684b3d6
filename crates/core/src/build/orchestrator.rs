use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    config::PanelConfig,
    error::{Error, Result},
    interfaces::{
        BuildRequest, Compiler, FileCopier, LogViewer, MetadataGenerator, PresentationSurface,
        ReloadNotifier,
    },
    registry::SessionRegistry,
    types::{BuildIdentity, BuildStatus, SessionId},
};

/// Files a build reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub solution: PathBuf,
    pub project: PathBuf,
    pub editor_metadata: PathBuf,
    pub player_metadata: PathBuf,
}

impl From<&PanelConfig> for ProjectLayout {
    fn from(config: &PanelConfig) -> Self {
        Self {
            solution: config.solution_path(),
            project: config.project_path(),
            editor_metadata: config.editor_metadata_path(),
            player_metadata: config.player_metadata_path(),
        }
    }
}

/// External services a build talks to
pub struct Collaborators {
    pub compiler: Box<dyn Compiler>,
    pub metadata: Box<dyn MetadataGenerator>,
    pub copier: Box<dyn FileCopier>,
    pub reload: Box<dyn ReloadNotifier>,
    pub log_viewer: Box<dyn LogViewer>,
}

/// What a completed `run_build` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub session: SessionId,
    pub status: BuildStatus,
    /// Whether the session was created by this run rather than reused
    pub created: bool,
    /// Whether a full assembly reload was requested after the build
    pub assemblies_reloaded: bool,
}

/// Drives one build attempt at a time
pub struct BuildOrchestrator {
    layout: ProjectLayout,
    collaborators: Collaborators,
    in_flight: AtomicBool,
}

/// Holds the in-flight flag for the duration of one build
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::BuildInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BuildOrchestrator {
    pub fn new(layout: ProjectLayout, collaborators: Collaborators) -> Self {
        Self {
            layout,
            collaborators,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn is_building(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Build the solution for `configuration` and record the attempt in `registry`.
    ///
    /// Returns `Ok(None)` without touching anything when there is no solution
    /// to build. `on_registry_changed` runs after the session is raised and
    /// again after its outcome is recorded.
    pub fn run_build(
        &self,
        configuration: &str,
        registry: &mut SessionRegistry,
        on_registry_changed: &mut dyn FnMut(&SessionRegistry),
    ) -> Result<Option<BuildReport>> {
        let _in_flight = InFlight::acquire(&self.in_flight)?;

        if !self.layout.solution.is_file() {
            tracing::debug!("No solution to build at {:?}", self.layout.solution);
            return Ok(None);
        }

        self.prepare_metadata()?;

        let identity = BuildIdentity::new(
            self.layout.solution.to_string_lossy().into_owned(),
            configuration,
        );
        let (id, created) = Self::start_session(registry, identity.clone())?;
        on_registry_changed(registry);

        let log_path = registry
            .get(id)
            .ok_or(Error::NotRegistered)?
            .log_path()
            .to_path_buf();
        let request = BuildRequest {
            identity,
            project: self.layout.project.clone(),
            log_path,
        };

        tracing::debug!("Building {}", request.identity);
        let result = self.collaborators.compiler.build_blocking(&request);

        let session = registry.get_mut(id).ok_or(Error::NotRegistered)?;
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Compiler failed to run for {}: {}", request.identity, e);
                session.finish(false, 0, 0, Vec::new())?;
                on_registry_changed(registry);
                return Err(e);
            }
        };

        if let Some(ref reported) = outcome.log_path {
            if reported != session.log_path() {
                tracing::debug!(
                    "Compiler reported log at {:?}, keeping {:?}",
                    reported,
                    session.log_path()
                );
            }
        }

        session.finish(
            outcome.success,
            outcome.error_count,
            outcome.warning_count,
            outcome.issues,
        )?;
        let status = session.status();
        on_registry_changed(registry);

        let assemblies_reloaded = if outcome.success {
            self.notify_reload()
        } else {
            false
        };

        Ok(Some(BuildReport {
            session: id,
            status,
            created,
            assemblies_reloaded,
        }))
    }

    /// Open the log of the single selected summary entry
    pub fn view_log(
        &self,
        registry: &SessionRegistry,
        surface: &dyn PresentationSurface,
    ) -> Result<PathBuf> {
        let selected = surface.selected_entries();
        let [index] = selected[..] else {
            return Err(Error::InvalidSelection {
                selected: selected.len(),
            });
        };

        let session = registry.at(index).ok_or(Error::IndexOutOfRange {
            index,
            count: registry.len(),
        })?;
        let log_path = session.log_path().to_path_buf();

        self.collaborators.log_viewer.open(&log_path)?;
        Ok(log_path)
    }

    /// Generate the editor scripts metadata and duplicate it for the player
    fn prepare_metadata(&self) -> Result<()> {
        let produced = self
            .collaborators
            .metadata
            .generate(&self.layout.project, &self.layout.editor_metadata);

        let Some(produced) = produced else {
            tracing::debug!("No scripts metadata produced for {:?}", self.layout.project);
            return Ok(());
        };

        if let Err(e) = self
            .collaborators
            .copier
            .copy(&produced, &self.layout.player_metadata)
        {
            tracing::error!("Failed to copy scripts metadata file: {}", e);
            return Err(Error::MetadataCopyFailed(e.message));
        }

        Ok(())
    }

    fn start_session(
        registry: &mut SessionRegistry,
        identity: BuildIdentity,
    ) -> Result<(SessionId, bool)> {
        if let Some(id) = registry.find(&identity) {
            registry
                .get_mut(id)
                .ok_or(Error::NotRegistered)?
                .begin_attempt()?;
            registry.raise(id)?;
            return Ok((id, false));
        }

        Ok((registry.get_or_create(identity), true))
    }

    /// Post-build hot-reload fan-out; returns whether a full reload was requested
    fn notify_reload(&self) -> bool {
        let reload = &self.collaborators.reload;

        reload.notify_running_instance();
        reload.restart_watch_timer();

        if reload.assemblies_reload_needed() {
            reload.reload_assemblies(false);
            true
        } else {
            false
        }
    }
}
