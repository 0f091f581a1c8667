//=========================================================================
// Configuration
//=========================================================================
//
// Application settings with sane defaults, loadable from a JSON file.
//
// Loading is deliberately forgiving: a missing or malformed file logs a
// warning and falls back to defaults, because a bad config must not keep
// an interactive session from starting. Saving is explicit and fallible.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== ConfigError =========================================================

/// Failure loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}

//=== Config ==============================================================

/// Application configuration.
///
/// Every field has a default, so a partial config file only overrides
/// what it mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    //--- Window -----------------------------------------------------------
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub window_resizable: bool,

    //--- Graphics ---------------------------------------------------------
    pub vsync_enabled: bool,

    //--- Timing -----------------------------------------------------------
    /// Target logic updates per second.
    pub tick_rate: f64,

    //--- Audio ------------------------------------------------------------
    pub music_volume: f32,
    pub sound_volume: f32,

    //--- Input ------------------------------------------------------------
    /// Action name → bindable input names, resolved by the input layer.
    pub input_mappings: HashMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let mut input_mappings = HashMap::new();
        let bind = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        input_mappings.insert("move_left".to_string(), bind(&["A", "Left"]));
        input_mappings.insert("move_right".to_string(), bind(&["D", "Right"]));
        input_mappings.insert("move_up".to_string(), bind(&["W", "Up"]));
        input_mappings.insert("move_down".to_string(), bind(&["S", "Down"]));
        input_mappings.insert("jump".to_string(), bind(&["J", "Space"]));
        input_mappings.insert("attack".to_string(), bind(&["K", "MouseLeft"]));
        input_mappings.insert("pause".to_string(), bind(&["P", "Escape"]));

        Self {
            window_title: "Emberlight".to_string(),
            window_width: 1280,
            window_height: 720,
            window_resizable: true,
            vsync_enabled: true,
            tick_rate: 60.0,
            music_volume: 0.5,
            sound_volume: 0.5,
            input_mappings,
        }
    }
}

impl Config {
    /// Loads a config file, returning the typed error on failure.
    ///
    /// Use this when the caller wants to fail loudly at startup;
    /// otherwise prefer [`Config::load_or_default`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref()).map_err(ConfigError::Read)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Loads a config file, degrading to defaults with a warning when
    /// the file is missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => {
                info!("Loaded config from {}", path.as_ref().display());
                config
            }
            Err(e) => {
                warn!(
                    "Could not load config from {} ({}), using defaults",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Writes the current configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), text).map_err(ConfigError::Write)?;
        info!("Saved config to {}", path.as_ref().display());
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
