use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::error::DashboardError;

use super::{paths, Config};

impl Config {
    /// Load configuration from config.json in the app directory
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let config_path = paths::get_config_path();
        if !config_path.exists() {
            warn!(path = %config_path.display(), "Config file not found, using defaults");
            return Self::default();
        }

        match Self::load_from(&config_path).await {
            Ok(config) => {
                info!(
                    api = %config.api_base_url,
                    locale = ?config.locale,
                    "Loaded configuration"
                );
                config
            }
            Err(err) => {
                warn!(error = ?err, "Failed to load config.json, using defaults");
                Self::default()
            }
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self, DashboardError> {
        let contents = fs::read_to_string(path).await.map_err(|err| {
            DashboardError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|err| {
            DashboardError::Config(format!("Failed to parse {}: {err}", path.display()))
        })?;

        if config.api_base_url.trim().is_empty() {
            return Err(DashboardError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Locale;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn missing_fields_take_defaults() {
        let file = write_config("{}");
        let config = Config::load_from(file.path()).await.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[tokio::test]
    async fn explicit_fields_are_used() {
        let file = write_config(
            r#"{"api_base_url": "http://relay.local:9000", "locale": "en", "request_timeout_secs": 3}"#,
        );
        let config = Config::load_from(file.path()).await.unwrap();
        assert_eq!(config.api_base_url, "http://relay.local:9000");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.request_timeout_secs, Some(3));
    }

    #[tokio::test]
    async fn malformed_file_is_a_config_error() {
        let file = write_config("{not json");
        let err = Config::load_from(file.path()).await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[tokio::test]
    async fn blank_base_url_is_rejected() {
        let file = write_config(r#"{"api_base_url": "  "}"#);
        let err = Config::load_from(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("api_base_url"));
    }

    #[tokio::test]
    async fn unreadable_path_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
