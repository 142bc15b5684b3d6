use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::validation::{ConfigValidator, DefaultConfigValidator};

pub const CONFIG_FILE_NAME: &str = ".buildpanel.json";

const EDITOR_METADATA_FILE: &str = "scripts_metadata.editor";
const PLAYER_METADATA_FILE: &str = "scripts_metadata.editor_player";
const SESSIONS_FILE: &str = "sessions.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PanelConfig {
    /// Solution file to build; a missing file turns builds into no-ops
    pub solution: PathBuf,
    /// Project descriptor the scripts metadata is generated from
    pub project: PathBuf,
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: PathBuf,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
    #[serde(default = "default_log_file_name")]
    pub log_file_name: String,
    #[serde(default = "default_configuration")]
    pub default_configuration: String,
    #[serde(default)]
    pub build: BuildCommandConfig,
    #[serde(default)]
    pub reload: ReloadConfig,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,

    // Directory relative paths resolve against (internal, not exposed in JSON)
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// How the external build tool is invoked.
///
/// `{solution}`, `{project}` and `{configuration}` in `args` are substituted
/// before the command runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildCommandConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReloadConfig {
    #[serde(default = "default_true")]
    pub assemblies_reload_needed: bool,
    /// File touched to tell a running instance to hot-reload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_file: Option<PathBuf>,
}

fn default_metadata_dir() -> PathBuf {
    PathBuf::from(".buildpanel/metadata")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from(".buildpanel/logs")
}

fn default_log_file_name() -> String {
    "build_log.txt".to_string()
}

fn default_configuration() -> String {
    "Debug".to_string()
}

fn default_script_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for BuildCommandConfig {
    fn default() -> Self {
        Self {
            command: "dotnet".to_string(),
            args: vec![
                "build".to_string(),
                "{solution}".to_string(),
                "-c".to_string(),
                "{configuration}".to_string(),
            ],
            env: BTreeMap::new(),
            timeout_secs: None,
        }
    }
}

impl BuildCommandConfig {
    pub fn expand_args(&self, solution: &Path, project: &Path, configuration: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{solution}", &solution.to_string_lossy())
                    .replace("{project}", &project.to_string_lossy())
                    .replace("{configuration}", configuration)
            })
            .collect()
    }
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            assemblies_reload_needed: true,
            signal_file: None,
        }
    }
}

impl PanelConfig {
    pub fn new(solution: impl Into<PathBuf>, project: impl Into<PathBuf>) -> Self {
        Self {
            solution: solution.into(),
            project: project.into(),
            metadata_dir: default_metadata_dir(),
            logs_dir: default_logs_dir(),
            log_file_name: default_log_file_name(),
            default_configuration: default_configuration(),
            build: BuildCommandConfig::default(),
            reload: ReloadConfig::default(),
            script_extensions: default_script_extensions(),
            root: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: PanelConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.root = path.parent().map(Path::to_path_buf);

        DefaultConfigValidator.validate(&config)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        DefaultConfigValidator.validate(self)?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match self.root {
            Some(ref root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn solution_path(&self) -> PathBuf {
        self.resolve(&self.solution)
    }

    pub fn project_path(&self) -> PathBuf {
        self.resolve(&self.project)
    }

    pub fn metadata_dir_path(&self) -> PathBuf {
        self.resolve(&self.metadata_dir)
    }

    pub fn logs_dir_path(&self) -> PathBuf {
        self.resolve(&self.logs_dir)
    }

    /// Scripts metadata written for the editor before each build
    pub fn editor_metadata_path(&self) -> PathBuf {
        self.metadata_dir_path().join(EDITOR_METADATA_FILE)
    }

    /// Copy of the editor metadata consumed by the player
    pub fn player_metadata_path(&self) -> PathBuf {
        self.metadata_dir_path().join(PLAYER_METADATA_FILE)
    }

    pub fn sessions_file_path(&self) -> PathBuf {
        self.metadata_dir_path().join(SESSIONS_FILE)
    }

    pub fn signal_file_path(&self) -> Option<PathBuf> {
        self.reload.signal_file.as_deref().map(|p| self.resolve(p))
    }
}
