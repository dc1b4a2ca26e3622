//! Configuration handling for the form client

use crate::api::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the submission endpoint
pub const ENDPOINT_ENV: &str = "REGIS_FORM_ENDPOINT";

/// File name of the log written while the form is on screen
pub const LOG_FILE_NAME: &str = "regis-form.log";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Registration endpoint URL
    pub endpoint: Option<String>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "regis", "regis-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file, created if needed.
    ///
    /// The terminal is taken over by the form, so logs never go to stderr.
    pub fn log_dir() -> PathBuf {
        Self::ensure_log_dir(
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs")),
        )
    }

    fn ensure_log_dir(preferred: Option<PathBuf>) -> PathBuf {
        preferred
            .filter(|dir| fs::create_dir_all(dir).is_ok())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Endpoint to post to: environment, then config file, then default
    pub fn resolve_endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            endpoint: Some("http://forms.internal/submitForm".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("http://forms.internal/submitForm".to_string())
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://a/b", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint.as_deref(), Some("http://a/b"));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = FormConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"endpoint": "http://from-file/submitForm"}"#).unwrap();

        let config = FormConfig::load_from(&path).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://from-file/submitForm")
        );
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(FormConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_log_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join("nested").join("logs");

        assert_eq!(FormConfig::ensure_log_dir(Some(logs.clone())), logs);
        assert!(logs.is_dir());
    }

    #[test]
    fn test_log_dir_falls_back_to_temp() {
        let dir = TempDir::new().unwrap();
        // A regular file blocks directory creation beneath it
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert_eq!(
            FormConfig::ensure_log_dir(Some(blocker.join("logs"))),
            std::env::temp_dir()
        );
        assert_eq!(FormConfig::ensure_log_dir(None), std::env::temp_dir());
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = FormConfig {
            endpoint: Some("http://file/submitForm".to_string()),
        };
        assert_eq!(
            config.endpoint_with_override(Some("http://env/submitForm".to_string())),
            "http://env/submitForm"
        );
        assert_eq!(
            config.endpoint_with_override(Some("  ".to_string())),
            "http://file/submitForm"
        );
        assert_eq!(config.endpoint_with_override(None), "http://file/submitForm");
        assert_eq!(
            FormConfig::default().endpoint_with_override(None),
            DEFAULT_ENDPOINT
        );
    }
}
