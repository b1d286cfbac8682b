//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Chart rendering settings
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (or set CALLSIGHT_OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Word cloud canvas width in pixels
    #[serde(default = "default_cloud_width")]
    pub cloud_width: u32,

    /// Word cloud canvas height in pixels
    #[serde(default = "default_cloud_height")]
    pub cloud_height: u32,

    /// Bar chart canvas width in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Bar chart canvas height in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_cloud_width() -> u32 {
    800
}

fn default_cloud_height() -> u32 {
    400
}

fn default_chart_width() -> u32 {
    1000
}

fn default_chart_height() -> u32 {
    500
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cloud_width: default_cloud_width(),
            cloud_height: default_cloud_height(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            llm: LlmSettings::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("CALLSIGHT_OPENAI_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "callsight", "callsight")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        Self::default().save(path)
    }

    /// Write these settings to a file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Set a configuration value by dotted key (e.g. `llm.model`).
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "general.log_level" => self.general.log_level = value.to_string(),
            "llm.provider" => self.llm.provider = value.to_string(),
            "llm.api_key" => self.llm.api_key = value.to_string(),
            "llm.model" => self.llm.model = value.to_string(),
            "llm.endpoint" => self.llm.endpoint = value.to_string(),
            "render.cloud_width" => self.render.cloud_width = parse_pixels(key, value)?,
            "render.cloud_height" => self.render.cloud_height = parse_pixels(key, value)?,
            "render.chart_width" => self.render.chart_width = parse_pixels(key, value)?,
            "render.chart_height" => self.render.chart_height = parse_pixels(key, value)?,
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}

fn parse_pixels(key: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .with_context(|| format!("{} expects a pixel count, got '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gpt_4o_mini() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.llm.provider, "openai");
    }

    #[test]
    fn default_canvas_sizes_match_report_layout() {
        let settings = Settings::default();
        assert_eq!(
            (settings.render.cloud_width, settings.render.cloud_height),
            (800, 400)
        );
        assert_eq!(
            (settings.render.chart_width, settings.render.chart_height),
            (1000, 500)
        );
    }

    #[test]
    fn set_value_updates_known_keys() {
        let mut settings = Settings::default();

        settings.set_value("llm.model", "gpt-4o").unwrap();
        assert_eq!(settings.llm.model, "gpt-4o");

        settings.set_value("render.cloud_width", "640").unwrap();
        assert_eq!(settings.render.cloud_width, 640);
    }

    #[test]
    fn set_value_rejects_unknown_key() {
        let mut settings = Settings::default();

        let err = settings.set_value("audio.backend", "cpal").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn set_value_rejects_non_numeric_pixels() {
        let mut settings = Settings::default();

        let err = settings.set_value("render.chart_width", "wide").unwrap_err();
        assert!(err.to_string().contains("pixel count"));
    }

    #[test]
    fn parses_partial_config() {
        let settings: Settings = toml::from_str("[llm]\nmodel = \"gpt-4o\"\n").unwrap();
        assert_eq!(settings.llm.model, "gpt-4o");
        assert_eq!(settings.llm.provider, "openai");
        assert_eq!(settings.render.cloud_width, 800);
    }
}
