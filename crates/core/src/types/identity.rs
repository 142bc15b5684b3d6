use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Identifies a build session by the solution it builds and the configuration it uses.
///
/// Both fields are compared as plain strings: `Game.sln` and `game.sln` are two
/// different identities, and no path normalization takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildIdentity {
    pub solution: String,
    pub configuration: String,
}

impl BuildIdentity {
    pub fn new(solution: impl Into<String>, configuration: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
            configuration: configuration.into(),
        }
    }

    pub fn solution_path(&self) -> &Path {
        Path::new(&self.solution)
    }

    /// File name of the solution without its extension, falling back to the raw string
    pub fn solution_stem(&self) -> &str {
        self.solution_path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.solution)
    }

    /// Name of the per-identity directory that holds this build's logs.
    ///
    /// Always a single path component: characters of the configuration other
    /// than ASCII alphanumerics, `-` and `_` are replaced, and a configuration
    /// that needed replacing gets a hash suffix so distinct identities keep
    /// distinct directories.
    pub fn logs_dir_name(&self) -> String {
        let solution_hash = md5::compute(self.solution.as_bytes());
        let configuration: String = self
            .configuration
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if configuration == self.configuration {
            format!("{solution_hash:x}_{configuration}")
        } else {
            let configuration_hash = format!("{:x}", md5::compute(self.configuration.as_bytes()));
            format!(
                "{solution_hash:x}_{configuration}_{}",
                &configuration_hash[..8]
            )
        }
    }

    /// Summary list label, e.g. `Game [Debug]`
    pub fn display_label(&self) -> String {
        format!("{} [{}]", self.solution_stem(), self.configuration)
    }
}

impl fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.solution, self.configuration)
    }
}
