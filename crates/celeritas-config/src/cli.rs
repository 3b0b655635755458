//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Celeritas command-line arguments.
///
/// CLI values override settings restored from the engine configuration file.
#[derive(Parser, Debug, Default)]
#[command(name = "celeritas", about = "Celeritas bootstrap")]
pub struct CliArgs {
    /// Horizontal resolution.
    #[arg(long)]
    pub width: Option<u32>,

    /// Vertical resolution.
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen.
    #[arg(long)]
    pub fullscreen: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skip the configuration dialog and run with the stored settings.
    #[arg(long)]
    pub no_dialog: bool,

    /// Use this directory as the home directory (overrides HOME).
    #[arg(long)]
    pub home: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a restored config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.video.resolution_x = w;
        }
        if let Some(h) = args.height {
            self.video.resolution_y = h;
        }
        if let Some(fs) = args.fullscreen {
            self.video.full_screen = fs;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1280),
            height: None,
            fullscreen: Some(true),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.video.resolution_x, 1280);
        assert!(config.video.full_screen);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults.
        assert_eq!(config.video.resolution_y, 480);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
