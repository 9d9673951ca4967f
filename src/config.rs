// Configuration management
//
// Loads and saves the front-end's settings as a TOML file.

use crate::display::WindowConfig;
use crate::error::ScreenError;
use crate::input::InputConfig;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE: &str = "screen_config.toml";

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen geometry and refresh settings
    pub video: WindowConfig,

    /// Input settings
    pub input: InputConfig,

    /// Demo engine settings
    pub engine: EngineConfig,
}

/// Settings for the bundled demo engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frames the engine spends booting before it accepts keys
    pub boot_frames: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { boot_frames: 30 }
    }
}

impl ScreenConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ScreenError> {
        let config: ScreenConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScreenError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Save configuration to a TOML file
    ///
    /// # Arguments
    /// * `path` - Path where the TOML configuration file will be saved
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ScreenError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Try to load configuration from file, or create default if it doesn't exist
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load_from_file(path).unwrap_or_else(|e| {
            warn!("Could not load config ({}), using defaults", e);
            let config = Self::default();
            if path.exists() {
                // Leave a broken file in place for the user to fix
                return config;
            }
            match config.save_to_file(path) {
                Ok(()) => info!("Created default configuration file {}", path.display()),
                Err(e) => warn!("Could not save default config: {}", e),
            }
            config
        })
    }

    /// Check every section for unusable values
    pub fn validate(&self) -> Result<(), ScreenError> {
        self.video.validate().map_err(ScreenError::InvalidConfig)?;
        self.input.validate().map_err(ScreenError::InvalidConfig)?;
        Ok(())
    }
}
