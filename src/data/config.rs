//! Application Configuration
//!
//! Handles loading and saving application configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Load configuration from file or create default
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

/// Recognition request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// "free_form" or "web_search"
    #[serde(default = "default_language_model")]
    pub language_model: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_prompt() -> String {
    "Say a word!".to_string()
}

fn default_language_model() -> String {
    "free_form".to_string()
}

fn default_max_results() -> usize {
    10
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            language_model: default_language_model(),
            max_results: default_max_results(),
        }
    }
}

/// Synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Spoken-language locale applied when the engine becomes ready
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en-GB".to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_request() {
        let config = AppConfig::default();
        assert_eq!(config.recognition.prompt, "Say a word!");
        assert_eq!(config.recognition.language_model, "free_form");
        assert_eq!(config.recognition.max_results, 10);
        assert_eq!(config.synthesis.locale, "en-GB");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [synthesis]
            locale = "en-US"
            "#,
        )
        .unwrap();
        assert_eq!(config.synthesis.locale, "en-US");
        assert_eq!(config.recognition.max_results, 10);
    }
}
