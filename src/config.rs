//! Panel settings persisted as JSON in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User-tunable panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub service_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            service_url: "http://127.0.0.1:8000".to_string(),
            poll_interval_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

/// Settings file location (e.g. ~/.config/scribe-panel/settings.json).
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("scribe-panel"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("settings.json")
}

impl PanelConfig {
    /// Load from the settings file. A missing file yields defaults.
    pub fn load() -> Result<Self, String> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(PanelConfig::default());
        }
        let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        let config: PanelConfig = serde_json::from_str(&data).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
        }
        let data = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, data).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            return Err(format!(
                "service_url must be an http(s) URL: {}",
                self.service_url
            ));
        }
        if self.poll_interval_secs == 0 {
            return Err("poll_interval_secs must be greater than zero".into());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".into());
        }
        Ok(())
    }
}
