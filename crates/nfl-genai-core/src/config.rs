//! Configuration file management for NFL GenAI.
//!
//! Reads `~/.config/nfl-genai/config.toml` (platform config dir). Every key is
//! optional; a missing default file means built-in defaults.
//!
//! ```toml
//! prompts_dir = "prompts"
//! log_level = "debug"
//!
//! [generation]
//! max_tokens = 10000
//! temperature = 0.3
//! top_p = 0.8
//!
//! [conversation]
//! window_size = 10
//!
//! [storage]
//! region = "us-east-1"
//! bucket = "nfl-genai-sessions"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenAiError, Result};

const APP_DIR: &str = "nfl-genai";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure for config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `<personality>.md` and `rules.md` prompt files
    pub prompts_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    pub generation: GenerationSettings,
    pub conversation: ConversationSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompts_dir: PathBuf::from("prompts"),
            log_level: "info".to_string(),
            generation: GenerationSettings::default(),
            conversation: ConversationSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

/// Sampling parameters passed to the inference backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 10_000,
            temperature: 0.3,
            top_p: 0.8,
        }
    }
}

/// Conversation history settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationSettings {
    /// Number of most recent messages kept in the model context
    pub window_size: usize,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self { window_size: 10 }
    }
}

/// Remote conversation store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub region: String,
    /// Bucket used when a request does not name one
    pub bucket: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            bucket: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default location.
    ///
    /// Returns defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GenAiError::not_found(
                "config file",
                path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GenAiError::io(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges the backend would reject.
    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.max_tokens == 0 {
            return Err(GenAiError::config("generation.max_tokens must be positive"));
        }
        if !(0.0..=1.0).contains(&generation.temperature) {
            return Err(GenAiError::config(format!(
                "generation.temperature must be within [0, 1], got {}",
                generation.temperature
            )));
        }
        if !(generation.top_p > 0.0 && generation.top_p <= 1.0) {
            return Err(GenAiError::config(format!(
                "generation.top_p must be within (0, 1], got {}",
                generation.top_p
            )));
        }
        if self.conversation.window_size == 0 {
            return Err(GenAiError::config(
                "conversation.window_size must be positive",
            ));
        }
        if self.storage.region.trim().is_empty() {
            return Err(GenAiError::config("storage.region must not be empty"));
        }
        Ok(())
    }
}

/// Returns the path to the configuration file: `<config dir>/nfl-genai/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| GenAiError::config("Could not determine configuration directory"))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generation.max_tokens, 10_000);
        assert_eq!(config.conversation.window_size, 10);
        assert_eq!(config.storage.region, "us-east-1");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
log_level = "debug"

[generation]
temperature = 0.7

[storage]
bucket = "sessions"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.top_p, 0.8);
        assert_eq!(config.storage.bucket.as_deref(), Some("sessions"));
        assert_eq!(config.storage.region, "us-east-1");
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = AppConfig::from_toml_str("[generation]\ntemperature = 1.5").unwrap_err();
        assert!(err.is_config());

        let err = AppConfig::from_toml_str("[generation]\ntop_p = 0.0").unwrap_err();
        assert!(err.is_config());

        let err = AppConfig::from_toml_str("[conversation]\nwindow_size = 0").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("log_level = ").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("nfl-genai/config.toml"));
        }
    }
}
