// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "property-chat.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub search_path: String,
    pub all_properties_path: String,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    pub log_dir: PathBuf,
    /// Replaces the built-in search guide shown in the notes panel.
    pub notes_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8083".to_string(),
            search_path: "/api/search".to_string(),
            all_properties_path: "/api/allProperties".to_string(),
            request_timeout_secs: None,
            log_dir: PathBuf::from("./logs"),
            notes_file: None,
        }
    }
}

impl ClientConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// An explicit path must exist. Otherwise `./property-chat.yml` is used
    /// when present, and the defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_from_path(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Text for the notes panel: the configured file, or the built-in guide.
    pub fn notes_text(&self) -> Result<String, ConfigError> {
        match &self.notes_file {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => Ok(crate::ui::notes::SEARCH_GUIDE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8083");
        assert_eq!(config.search_path, "/api/search");
        assert_eq!(config.all_properties_path, "/api/allProperties");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ClientConfig::from_yaml_str(
            "base_url: http://search.internal:9000\nrequest_timeout_secs: 15\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://search.internal:9000");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.search_path, "/api/search");
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = ClientConfig::load(Some(Path::new("./does-not-exist.yml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_notes_file_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Only ask about Mulund.").unwrap();

        let config = ClientConfig {
            notes_file: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        assert_eq!(config.notes_text().unwrap(), "Only ask about Mulund.");
        assert!(ClientConfig::default().notes_text().unwrap().contains("BHK"));
    }
}
