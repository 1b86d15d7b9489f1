//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{NoticeError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(NoticeError::IoError)` - The file could not be read
    /// * `Err(NoticeError::UserError)` - The YAML could not be parsed
    /// * `Err(NoticeError::ValidationError)` - A value was rejected
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NoticeError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| NoticeError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            NoticeError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `sender` must look like an address (contain `@`)
    /// - `default_recipients` entries must look like addresses
    /// - `default_template` and `outbox_dir` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if !self.sender.contains('@') {
            return Err(NoticeError::ValidationError(format!(
                "config: sender '{}' is not an email address",
                self.sender
            )));
        }

        if let Some(bad) = self.default_recipients.iter().find(|r| !r.contains('@')) {
            return Err(NoticeError::ValidationError(format!(
                "config: default_recipients entry '{}' is not an email address",
                bad
            )));
        }

        if self.default_template.trim().is_empty() {
            return Err(NoticeError::ValidationError(
                "config: default_template must not be empty".to_string(),
            ));
        }

        if self.outbox_dir.trim().is_empty() {
            return Err(NoticeError::ValidationError(
                "config: outbox_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
