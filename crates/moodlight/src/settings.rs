use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Millis;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the director and mood window. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_min_prediction_samples")]
    pub min_prediction_samples: usize,
    #[serde(default = "default_max_active_layers")]
    pub max_active_layers: usize,
    #[serde(default = "default_beat_cooldown_ms")]
    pub beat_cooldown_ms: Millis,
    #[serde(default = "default_beat_chance_pct")]
    pub beat_chance_pct: u32,
    #[serde(default = "default_energy_threshold")]
    pub energy_threshold: f32,
    #[serde(default = "default_energy_cooldown_ms")]
    pub energy_cooldown_ms: Millis,
    #[serde(default = "default_energy_chance_pct")]
    pub energy_chance_pct: u32,
    #[serde(default = "default_ambient_chance_per_mille")]
    pub ambient_chance_per_mille: u32,
    #[serde(default = "default_scene_log_interval_ms")]
    pub scene_log_interval_ms: Millis,
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

fn default_version() -> u32 { 1 }
fn default_history_capacity() -> usize { 150 }
fn default_min_prediction_samples() -> usize { 10 }
fn default_max_active_layers() -> usize { 4 }
fn default_beat_cooldown_ms() -> Millis { 800 }
fn default_beat_chance_pct() -> u32 { 70 }
fn default_energy_threshold() -> f32 { 0.6 }
fn default_energy_cooldown_ms() -> Millis { 1500 }
fn default_energy_chance_pct() -> u32 { 40 }
fn default_ambient_chance_per_mille() -> u32 { 3 }
fn default_scene_log_interval_ms() -> Millis { 2000 }
fn default_tick_hz() -> u32 { 25 }

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            history_capacity: default_history_capacity(),
            min_prediction_samples: default_min_prediction_samples(),
            max_active_layers: default_max_active_layers(),
            beat_cooldown_ms: default_beat_cooldown_ms(),
            beat_chance_pct: default_beat_chance_pct(),
            energy_threshold: default_energy_threshold(),
            energy_cooldown_ms: default_energy_cooldown_ms(),
            energy_chance_pct: default_energy_chance_pct(),
            ambient_chance_per_mille: default_ambient_chance_per_mille(),
            scene_log_interval_ms: default_scene_log_interval_ms(),
            tick_hz: default_tick_hz(),
        }
    }
}

impl DirectorConfig {
    /// Path to the director config (~/.config/moodlight/director.json).
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("moodlight").join("director.json")
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::info!("No director config found, using defaults");
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded director config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring director config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
