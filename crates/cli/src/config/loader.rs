use anyhow::{Context, Result, bail};
use buildpanel_core::interfaces::LogViewer;
use buildpanel_core::services::FsFileCopier;
use buildpanel_core::{
    BuildOrchestrator, BuildPanel, Collaborators, PanelConfig, ProjectLayout, SessionStore,
    config::CONFIG_FILE_NAME,
};
use std::env;
use std::path::Path;
use tracing::debug;

use crate::services::{ProcessCompiler, ScriptsMetadataGenerator, SignalFileNotifier};

/// Find and load the config governing the current directory
pub fn load_config() -> Result<PanelConfig> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    load_config_from(&cwd)
}

pub fn load_config_from(start: &Path) -> Result<PanelConfig> {
    let Some(path) = PanelConfig::find_config_file(start) else {
        bail!(
            "No {} found in {} or its parents; run `buildpanel init` first",
            CONFIG_FILE_NAME,
            start.display()
        );
    };

    debug!("Using config {}", path.display());
    PanelConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

pub fn session_store(config: &PanelConfig) -> SessionStore {
    SessionStore::new(config.sessions_file_path())
}

/// Collaborators backed by the real build tool and file system
pub fn collaborators(config: &PanelConfig, log_viewer: Box<dyn LogViewer>) -> Collaborators {
    let mut compiler = ProcessCompiler::new(config.build.clone(), config.solution_path());
    if let Some(ref root) = config.root {
        compiler = compiler.with_working_dir(root);
    }

    Collaborators {
        compiler: Box::new(compiler),
        metadata: Box::new(ScriptsMetadataGenerator::new(
            config.script_extensions.clone(),
        )),
        copier: Box::new(FsFileCopier::new()),
        reload: Box::new(SignalFileNotifier::new(
            config.signal_file_path(),
            config.reload.assemblies_reload_needed,
        )),
        log_viewer,
    }
}

/// Panel restored from the session store
pub fn open_panel(config: &PanelConfig, log_viewer: Box<dyn LogViewer>) -> Result<BuildPanel> {
    let store = session_store(config);
    let registry = store
        .load(config.logs_dir_path(), &config.log_file_name)
        .with_context(|| format!("Failed to load sessions from {}", store.path().display()))?;

    let orchestrator = BuildOrchestrator::new(
        ProjectLayout::from(config),
        collaborators(config, log_viewer),
    );
    Ok(BuildPanel::new(registry, orchestrator))
}

pub fn save_panel(config: &PanelConfig, panel: &BuildPanel) -> Result<()> {
    let store = session_store(config);
    store
        .save(panel.registry())
        .with_context(|| format!("Failed to save sessions to {}", store.path().display()))
}
