//! The builds panel facade
//!
//! A host adapter forwards widget events (build pressed, item selected,
//! nothing selected, filter toggled, view log pressed) to [`BuildPanel`],
//! which routes them to the registry, selection controller, issue filter
//! and orchestrator and pushes the resulting view state to the surface.

use std::path::PathBuf;

use crate::{
    build::{BuildOrchestrator, BuildReport, Collaborators, ProjectLayout},
    config::PanelConfig,
    error::{Error, Result},
    filter::IssueFilter,
    interfaces::PresentationSurface,
    registry::SessionRegistry,
    selection::SelectionController,
};

pub struct BuildPanel {
    registry: SessionRegistry,
    selection: SelectionController,
    orchestrator: BuildOrchestrator,
}

impl BuildPanel {
    pub fn new(registry: SessionRegistry, orchestrator: BuildOrchestrator) -> Self {
        Self {
            registry,
            selection: SelectionController::new(),
            orchestrator,
        }
    }

    /// Panel with an empty registry laid out as `config` describes
    pub fn from_config(config: &PanelConfig, collaborators: Collaborators) -> Self {
        let registry = SessionRegistry::new(config.logs_dir_path(), config.log_file_name.clone());
        let orchestrator = BuildOrchestrator::new(ProjectLayout::from(config), collaborators);
        Self::new(registry, orchestrator)
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn orchestrator(&self) -> &BuildOrchestrator {
        &self.orchestrator
    }

    /// Redraw the summary list from the registry
    pub fn refresh(&mut self, surface: &mut dyn PresentationSurface) {
        self.selection.rebuild(&self.registry, surface);
    }

    /// Run a build; the panel is brought forward once the session appears
    pub fn build(
        &mut self,
        configuration: &str,
        surface: &mut dyn PresentationSurface,
    ) -> Result<Option<BuildReport>> {
        let Self {
            registry,
            selection,
            orchestrator,
        } = self;

        let mut revealed = false;
        let mut on_registry_changed = |registry: &SessionRegistry| {
            if !revealed {
                surface.reveal_panel();
                revealed = true;
            }
            selection.rebuild(registry, &mut *surface);
        };

        orchestrator.run_build(configuration, registry, &mut on_registry_changed)
    }

    /// The summary list reported a selected entry.
    ///
    /// An index the registry does not know means the surface and the core
    /// have drifted apart; it is logged and otherwise ignored.
    pub fn item_selected(&mut self, index: usize, surface: &mut dyn PresentationSurface) {
        if let Err(e) = self.selection.select(index, &self.registry, surface) {
            tracing::warn!("Ignoring summary selection: {}", e);
        }
    }

    /// The summary list reported that nothing is selected
    pub fn nothing_selected(&mut self, surface: &mut dyn PresentationSurface) {
        self.selection.clear_selection(&self.registry, surface);
    }

    pub fn warnings_toggled(
        &mut self,
        visible: bool,
        surface: &mut dyn PresentationSurface,
    ) -> Result<()> {
        IssueFilter::set_warnings_visible(&mut self.registry, &self.selection, surface, visible)
    }

    pub fn errors_toggled(
        &mut self,
        visible: bool,
        surface: &mut dyn PresentationSurface,
    ) -> Result<()> {
        IssueFilter::set_errors_visible(&mut self.registry, &self.selection, surface, visible)
    }

    /// Open the log of the selected summary entry
    pub fn view_log(&self, surface: &dyn PresentationSurface) -> Result<PathBuf> {
        self.orchestrator.view_log(&self.registry, surface)
    }

    /// Select the entry at `index` on the surface and show its log
    pub fn view_log_at(
        &mut self,
        index: usize,
        surface: &mut dyn PresentationSurface,
    ) -> Result<PathBuf> {
        if index >= self.registry.len() {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.registry.len(),
            });
        }
        surface.select_entry(index);
        self.selection.select(index, &self.registry, surface)?;
        self.view_log(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CompileOutcome, Compiler};
    use crate::testing::{
        RecordingLogViewer, RecordingNotifier, RecordingSurface, ScriptedCompiler, StubCopier,
        StubMetadataGenerator, call_log,
    };
    use crate::types::{BuildIssue, BuildStatus};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn panel(temp_dir: &TempDir, compiler: Box<dyn Compiler>) -> BuildPanel {
        std::fs::write(temp_dir.path().join("Game.sln"), "").unwrap();
        let config = PanelConfig::new("Game.sln", "Game.csproj").with_root(temp_dir.path());
        let log = call_log();

        BuildPanel::from_config(
            &config,
            Collaborators {
                compiler,
                metadata: Box::new(StubMetadataGenerator {
                    produce: true,
                    calls: log.clone(),
                }),
                copier: Box::new(StubCopier {
                    failure: None,
                    calls: log.clone(),
                }),
                reload: Box::new(RecordingNotifier {
                    reload_needed: false,
                    calls: log.clone(),
                }),
                log_viewer: Box::new(RecordingLogViewer {
                    opened: Arc::new(Mutex::new(Vec::new())),
                }),
            },
        )
    }

    fn compiler(outcome: CompileOutcome) -> Box<dyn Compiler> {
        Box::new(ScriptedCompiler::new(outcome, call_log()))
    }

    #[test]
    fn test_build_reveals_panel_and_selects_new_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut panel = panel(&temp_dir, compiler(CompileOutcome::failed(2, 0)));
        let mut surface = RecordingSurface::default();

        let report = panel.build("Debug", &mut surface).unwrap().unwrap();

        assert_eq!(report.status, BuildStatus::Errored);
        assert_eq!(surface.reveals, 1);
        assert_eq!(surface.labels(), vec!["Game [Debug]"]);
        assert_eq!(surface.selected, vec![0]);
        assert!(surface.aux_visible);
        assert!(surface.entries[0].tooltip.contains("Status: Errored"));
        assert!(surface.entries[0].tooltip.contains("Errors: 2"));
    }

    #[test]
    fn test_selection_survives_new_builds_by_index() {
        let temp_dir = TempDir::new().unwrap();
        let mut panel = panel(&temp_dir, compiler(CompileOutcome::succeeded(0)));
        let mut surface = RecordingSurface::default();

        panel.build("Debug", &mut surface).unwrap();
        panel.build("Release", &mut surface).unwrap();
        assert_eq!(surface.labels(), vec!["Game [Release]", "Game [Debug]"]);
        assert_eq!(panel.selection().current_index(), Some(0));

        panel.item_selected(1, &mut surface);
        panel.build("Release", &mut surface).unwrap();

        assert_eq!(panel.selection().current_index(), Some(1));
        assert_eq!(surface.selected, vec![1]);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let mut panel = panel(&temp_dir, compiler(CompileOutcome::succeeded(0)));
        let mut surface = RecordingSurface::default();
        panel.build("Debug", &mut surface).unwrap();

        panel.item_selected(5, &mut surface);

        assert_eq!(panel.selection().current_index(), Some(0));
        assert!(surface.aux_visible);
    }

    #[test]
    fn test_nothing_selected_then_toggle_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut panel = panel(&temp_dir, compiler(CompileOutcome::succeeded(0)));
        let mut surface = RecordingSurface::default();
        panel.build("Debug", &mut surface).unwrap();

        panel.nothing_selected(&mut surface);

        assert!(!surface.aux_visible);
        assert!(!surface.detail_visible);
        assert!(matches!(
            panel.warnings_toggled(false, &mut surface),
            Err(Error::NoSessionSelected)
        ));
        assert!(matches!(panel.view_log(&surface), Err(Error::InvalidSelection { selected: 0 })));
    }

    #[test]
    fn test_toggles_redraw_selected_session() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = CompileOutcome::failed(1, 1)
            .with_issues(vec![BuildIssue::warning("w"), BuildIssue::error("e")]);
        let mut panel = panel(&temp_dir, compiler(outcome));
        let mut surface = RecordingSurface::default();
        panel.build("Debug", &mut surface).unwrap();

        panel.errors_toggled(false, &mut surface).unwrap();

        let (_, issues) = surface.last_render().unwrap();
        assert_eq!(issues, &vec![BuildIssue::warning("w")]);
        assert!(!panel.registry().at(0).unwrap().errors_visible());
    }

    #[test]
    fn test_view_log_at_selects_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut panel = panel(&temp_dir, compiler(CompileOutcome::succeeded(0)));
        let mut surface = RecordingSurface::default();
        panel.build("Debug", &mut surface).unwrap();
        panel.build("Release", &mut surface).unwrap();

        let path = panel.view_log_at(1, &mut surface).unwrap();

        assert_eq!(path, panel.registry().at(1).unwrap().log_path());
        assert_eq!(surface.selected, vec![1]);
        assert!(matches!(
            panel.view_log_at(2, &mut surface),
            Err(Error::IndexOutOfRange { index: 2, count: 2 })
        ));
    }
}
