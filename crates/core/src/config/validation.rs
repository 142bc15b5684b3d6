//! Configuration validation for ensuring configs are valid before use

use crate::{
    config::PanelConfig,
    error::{Error, Result},
};

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &PanelConfig) -> Result<()>;
}

/// Checks every field a build depends on
pub struct DefaultConfigValidator;

impl ConfigValidator for DefaultConfigValidator {
    fn validate(&self, config: &PanelConfig) -> Result<()> {
        let mut problems = Vec::new();

        if config.build.command.trim().is_empty() {
            problems.push("build.command must not be empty".to_string());
        }
        if config.default_configuration.trim().is_empty() {
            problems.push("default_configuration must not be empty".to_string());
        }
        if config.log_file_name.trim().is_empty() {
            problems.push("log_file_name must not be empty".to_string());
        }
        if config.log_file_name.contains(['/', '\\']) {
            problems.push(format!(
                "log_file_name must be a file name, got '{}'",
                config.log_file_name
            ));
        }
        if config.build.timeout_secs == Some(0) {
            problems.push("build.timeout_secs must be greater than zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigError(problems.join("; ")))
        }
    }
}
