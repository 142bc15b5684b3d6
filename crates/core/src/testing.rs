//! Recording test doubles shared by the unit tests

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{
    error::{Error, Result},
    interfaces::{
        BuildRequest, CompileOutcome, Compiler, CopyError, FileCopier, LogViewer,
        MetadataGenerator, PresentationSurface, ReloadNotifier, SummaryEntry,
    },
    types::BuildIssue,
};

/// Surface that keeps the last state it was told to display
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub entries: Vec<SummaryEntry>,
    pub selected: Vec<usize>,
    pub active_detail: Option<usize>,
    pub detail_visible: bool,
    pub aux_visible: bool,
    pub toggles: Option<(bool, bool)>,
    pub rendered: Vec<(usize, Vec<BuildIssue>)>,
    pub reveals: usize,
}

impl RecordingSurface {
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn last_render(&self) -> Option<&(usize, Vec<BuildIssue>)> {
        self.rendered.last()
    }
}

impl PresentationSurface for RecordingSurface {
    fn clear_entries(&mut self) {
        self.entries.clear();
        self.selected.clear();
    }

    fn add_entry(&mut self, entry: SummaryEntry) {
        self.entries.push(entry);
    }

    fn select_entry(&mut self, index: usize) {
        // Single-select list
        self.selected = vec![index];
    }

    fn unselect_all(&mut self) {
        self.selected.clear();
    }

    fn selected_entries(&self) -> Vec<usize> {
        self.selected.clone()
    }

    fn set_active_detail(&mut self, index: usize) {
        self.active_detail = Some(index);
    }

    fn set_detail_visible(&mut self, visible: bool) {
        self.detail_visible = visible;
    }

    fn set_aux_controls_visible(&mut self, visible: bool) {
        self.aux_visible = visible;
    }

    fn set_filter_toggles(&mut self, warnings: bool, errors: bool) {
        self.toggles = Some((warnings, errors));
    }

    fn render_issues(&mut self, index: usize, issues: &[&BuildIssue]) {
        self.rendered
            .push((index, issues.iter().map(|&issue| issue.clone()).collect()));
    }

    fn reveal_panel(&mut self) {
        self.reveals += 1;
    }
}

/// Shared, ordered record of collaborator calls
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub struct ScriptedCompiler {
    pub outcome: Mutex<Option<Result<CompileOutcome>>>,
    pub calls: CallLog,
}

impl ScriptedCompiler {
    pub fn new(outcome: CompileOutcome, calls: CallLog) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(outcome))),
            calls,
        }
    }

    pub fn failing(message: &str, calls: CallLog) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(Error::Compiler(message.to_string())))),
            calls,
        }
    }
}

impl Compiler for ScriptedCompiler {
    fn build_blocking(&self, request: &BuildRequest) -> Result<CompileOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("compile {}", request.configuration()));
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(CompileOutcome::succeeded(0)))
    }
}

/// Generator that writes a small file unless told to produce nothing
pub struct StubMetadataGenerator {
    pub produce: bool,
    pub calls: CallLog,
}

impl MetadataGenerator for StubMetadataGenerator {
    fn generate(&self, _project: &Path, output: &Path) -> Option<PathBuf> {
        self.calls.lock().unwrap().push("generate".to_string());
        if !self.produce {
            return None;
        }
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        std::fs::write(output, "{}").ok()?;
        Some(output.to_path_buf())
    }
}

pub struct StubCopier {
    pub failure: Option<String>,
    pub calls: CallLog,
}

impl FileCopier for StubCopier {
    fn copy(&self, src: &Path, dst: &Path) -> std::result::Result<(), CopyError> {
        self.calls.lock().unwrap().push(format!(
            "copy {} -> {}",
            src.file_name().unwrap_or_default().to_string_lossy(),
            dst.file_name().unwrap_or_default().to_string_lossy()
        ));
        match self.failure {
            Some(ref message) => Err(CopyError::new(message.clone())),
            None => Ok(()),
        }
    }
}

pub struct RecordingNotifier {
    pub reload_needed: bool,
    pub calls: CallLog,
}

impl ReloadNotifier for RecordingNotifier {
    fn notify_running_instance(&self) {
        self.calls
            .lock()
            .unwrap()
            .push("notify_running_instance".to_string());
    }

    fn restart_watch_timer(&self) {
        self.calls
            .lock()
            .unwrap()
            .push("restart_watch_timer".to_string());
    }

    fn assemblies_reload_needed(&self) -> bool {
        self.reload_needed
    }

    fn reload_assemblies(&self, soft: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("reload_assemblies({soft})"));
    }
}

pub struct RecordingLogViewer {
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl LogViewer for RecordingLogViewer {
    fn open(&self, path: &Path) -> Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
