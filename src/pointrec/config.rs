use crate::error::{RecorderError, Result};
use crate::geolocation::GeolocationOptions;
use crate::model::{Color, Coordinates};
use crate::store::points::{DEFAULT_LABEL_PREFIX, DEFAULT_LABEL_START};
use crate::store::LabelSequence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`RecorderConfig::set`].
pub const SETTABLE_KEYS: [&str; 4] = ["default-color", "export-dir", "label-prefix", "label-start"];

/// Configuration for pointrec, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecorderConfig {
    /// Colour selected when a session starts
    #[serde(default)]
    pub default_color: Color,

    /// Directory receiving CSV and JSON exports
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Prefix of suggested node labels (e.g. "A" for A75, A76, ...)
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// First number handed out by the label suggestion
    #[serde(default = "default_label_start")]
    pub label_start: u32,

    /// Fixed device position used by `locate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,

    #[serde(default)]
    pub geolocation: GeolocationOptions,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_label_prefix() -> String {
    DEFAULT_LABEL_PREFIX.to_string()
}

fn default_label_start() -> u32 {
    DEFAULT_LABEL_START
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            default_color: Color::default(),
            export_dir: default_export_dir(),
            label_prefix: default_label_prefix(),
            label_start: default_label_start(),
            location: None,
            geolocation: GeolocationOptions::default(),
        }
    }
}

impl RecorderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecorderError::Io)?;
        let config: RecorderConfig = serde_json::from_str(&content)
            .map_err(|e| RecorderError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecorderError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecorderError::Serialization)?;
        fs::write(config_path, content).map_err(RecorderError::Io)?;
        Ok(())
    }

    pub fn label_sequence(&self) -> LabelSequence {
        LabelSequence::new(self.label_prefix.as_str(), self.label_start)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-color" => Some(self.default_color.to_string()),
            "export-dir" => Some(self.export_dir.display().to_string()),
            "label-prefix" => Some(self.label_prefix.clone()),
            "label-start" => Some(self.label_start.to_string()),
            "location" => Some(
                self.location
                    .map(|c| format!("{},{}", c.lat, c.lon))
                    .unwrap_or_else(|| "(none)".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-color" => {
                self.default_color = value.parse()?;
            }
            "export-dir" => {
                if value.trim().is_empty() {
                    return Err("export-dir cannot be empty".to_string());
                }
                self.export_dir = PathBuf::from(value.trim());
            }
            "label-prefix" => {
                let prefix = value.trim();
                if prefix.is_empty() {
                    return Err("label-prefix cannot be empty".to_string());
                }
                self.label_prefix = prefix.to_uppercase();
            }
            "label-start" => {
                self.label_start = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("label-start must be a whole number, got {}", value))?;
            }
            _ => {
                return Err(format!(
                    "Unknown config key: {} (settable: {})",
                    key,
                    SETTABLE_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["default-color", "export-dir", "label-prefix", "label-start", "location"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}
