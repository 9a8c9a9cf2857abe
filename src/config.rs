//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TRAVELSATHI_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Registration API base URL
    pub api_base_url: Option<String>,
    /// Request timeout in seconds (transport default when unset)
    pub request_timeout_secs: Option<u64>,
    /// Offer the USER/ADMIN role selector on the form
    pub allow_role_selection: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "travelsathi", "travelsathi-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file means defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the API base URL: environment, then file, then default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn role_selectable(&self) -> bool {
        self.allow_role_selection.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.allow_role_selection.is_none());
        assert!(config.request_timeout().is_none());
        assert!(!config.role_selectable());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_base_url: Some("https://api.travelsathi.example".to_string()),
            request_timeout_secs: Some(15),
            allow_role_selection: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://api.travelsathi.example".to_string())
        );
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(15)));
        assert!(parsed.role_selectable());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 5, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_base_url_precedence() {
        let config = TuiConfig {
            api_base_url: Some("http://file:1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_base_url(Some("http://env:2".to_string())),
            "http://env:2"
        );
        assert_eq!(config.resolve_api_base_url(None), "http://file:1");
        assert_eq!(
            config.resolve_api_base_url(Some("  ".to_string())),
            "http://file:1"
        );
        assert_eq!(
            TuiConfig::default().resolve_api_base_url(None),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    fn temp_config(name: &str, content: Option<&str>) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "travelsathi-tui-{}-{name}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        path
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let path = temp_config("missing", None);
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.api_base_url.is_none());
        assert!(!config.role_selectable());
    }

    #[test]
    fn test_load_from_reads_file() {
        let path = temp_config(
            "valid",
            Some(r#"{"api_base_url": "http://api:1", "allow_role_selection": true}"#),
        );
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://api:1"));
        assert!(config.role_selectable());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = temp_config("malformed", Some("{not json"));
        let err = TuiConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("Invalid config"));
    }
}
