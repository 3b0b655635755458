//! Configuration structs with hard-coded defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Video and window settings.
    pub video: VideoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Video and window configuration. These are the settings the configuration
/// dialog edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    /// Render system name (`auto` selects among the loaded plugins).
    pub render_system: String,
    /// Horizontal resolution in logical pixels.
    pub resolution_x: u32,
    /// Vertical resolution in logical pixels.
    pub resolution_y: u32,
    /// Start in fullscreen mode.
    pub full_screen: bool,
    /// Enable vsync.
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            render_system: "auto".to_string(),
            resolution_x: 640,
            resolution_y: 480,
            full_screen: false,
            vsync: true,
            title: "Celeritas Test Window".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Restore / Save ---

impl Config {
    /// Restore the configuration from the given file, or fall back to the
    /// hard-coded defaults when the file does not exist.
    ///
    /// A missing file is not an error; an unreadable or unparseable file is.
    pub fn restore_or_default(config_file: &Path) -> Result<Self, ConfigError> {
        if !config_file.exists() {
            log::info!(
                "Missing configuration file `{}`, running off hard-coded defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_file).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        log::info!("Restored configuration from `{}`", config_file.display());
        Ok(config)
    }

    /// Save the configuration to the given file.
    ///
    /// The write is atomic: the serialized form goes to a `.tmp` sibling
    /// first, which is then renamed over the target.
    pub fn save(&self, config_file: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_file.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        let mut tmp_name = config_file.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_file = std::path::PathBuf::from(tmp_name);

        std::fs::write(&tmp_file, serialized).map_err(ConfigError::WriteError)?;
        std::fs::rename(&tmp_file, config_file).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
