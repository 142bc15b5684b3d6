//! Scripts metadata generator
//!
//! Scans the project's directory for script sources and records, per
//! script, its modification time and the first class it declares. The
//! player reads its copy of this file to map scripts to classes.

use buildpanel_core::interfaces::MetadataGenerator;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::UNIX_EPOCH;

use crate::utils::{find_files_with_extension, read_lossy};

static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*namespace\s+(?P<name>[A-Za-z_][\w.]*)").unwrap());

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:(?:public|internal|private|protected|static|abstract|sealed|partial)\s+)*class\s+(?P<name>[A-Za-z_]\w*)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptClass {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub modified_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ScriptClass>,
}

/// Script path (relative to the project directory, `/`-separated) to metadata
pub type ScriptsMetadata = BTreeMap<String, ScriptMetadata>;

pub struct ScriptsMetadataGenerator {
    extensions: Vec<String>,
}

impl ScriptsMetadataGenerator {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn collect(&self, project_dir: &Path) -> ScriptsMetadata {
        find_files_with_extension(project_dir, &self.extensions)
            .into_iter()
            .filter_map(|path| {
                let relative = path.strip_prefix(project_dir).ok()?;
                let key = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                Some((key, describe(&path)))
            })
            .collect()
    }
}

fn describe(path: &Path) -> ScriptMetadata {
    let modified_time = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let class = match read_lossy(path) {
        Ok(source) => parse_class(&source),
        Err(e) => {
            tracing::warn!("Failed to read script {:?}: {}", path, e);
            None
        }
    };

    ScriptMetadata {
        modified_time,
        class,
    }
}

pub fn parse_class(source: &str) -> Option<ScriptClass> {
    let class_name = CLASS.captures(source)?["name"].to_string();
    let namespace = NAMESPACE
        .captures(source)
        .map(|caps| caps["name"].to_string())
        .unwrap_or_default();
    Some(ScriptClass {
        namespace,
        class_name,
    })
}

impl MetadataGenerator for ScriptsMetadataGenerator {
    fn generate(&self, project: &Path, output: &Path) -> Option<PathBuf> {
        let project_dir = match project.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let metadata = self.collect(project_dir);

        let json = match serde_json::to_string_pretty(&metadata) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize scripts metadata: {}", e);
                return None;
            }
        };

        if let Some(parent) = output.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::error!("Failed to create {:?}: {}", parent, e);
                return None;
            }
        }
        if let Err(e) = std::fs::write(output, json) {
            tracing::error!("Failed to write scripts metadata to {:?}: {}", output, e);
            return None;
        }

        tracing::debug!("Wrote metadata for {} scripts to {:?}", metadata.len(), output);
        Some(output.to_path_buf())
    }
}
