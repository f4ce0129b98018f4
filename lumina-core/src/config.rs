//! Configuration management for Lumina
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (LUMINA_*)
//! 3. Config file (~/.config/lumina/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Generator-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model used for plans and study content
    pub text_model: String,

    /// Model used for educational diagrams
    pub image_model: String,

    /// Base URL of the generateContent API
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory override; platform default when unset
    pub data_dir: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Generator configuration
    pub generator: GeneratorConfig,

    /// Storage configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/lumina/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumina").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - LUMINA_MODEL: text model
    /// - LUMINA_IMAGE_MODEL: image model
    /// - LUMINA_DATA_DIR: data directory
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("LUMINA_MODEL") {
            self.generator.text_model = model;
        }

        if let Ok(model) = std::env::var("LUMINA_IMAGE_MODEL") {
            self.generator.image_model = model;
        }

        if let Ok(dir) = std::env::var("LUMINA_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        model: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(m) = model {
            self.generator.text_model = m;
        }

        if let Some(dir) = data_dir {
            self.storage.data_dir = Some(dir);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(model: Option<String>, data_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(model, data_dir))
    }

    /// Resolve the effective data directory
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|p| p.join("lumina"))
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.generator.text_model, "gemini-3-flash-preview");
        assert_eq!(config.generator.image_model, "gemini-2.5-flash-image");
        assert!(config.generator.base_url.starts_with("https://"));
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some("gemini-custom".to_string()),
            Some(PathBuf::from("/tmp/lumina")),
        );

        assert_eq!(config.generator.text_model, "gemini-custom");
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/lumina")));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[generator]
text_model = "gemini-next"
base_url = "http://localhost:9999/v1beta"

[storage]
data_dir = "/var/lib/lumina"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.generator.text_model, "gemini-next");
        assert_eq!(config.generator.base_url, "http://localhost:9999/v1beta");
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/lumina"))
        );
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[generator]
text_model = "gemini-next"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // image_model should use default
        assert_eq!(config.generator.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.generator.text_model, "gemini-next");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/tmp/custom")),
            },
            ..Config::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/custom"));
    }
}
