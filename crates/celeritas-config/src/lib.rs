//! Configuration system for the Celeritas application.
//!
//! Provides the application directory layout under the user's home directory,
//! startup directory creation, persistent settings as RON files, and CLI
//! overrides via clap.

mod cli;
mod config;
mod error;
mod paths;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, VideoConfig};
pub use error::ConfigError;
pub use paths::{
    APP_DIR, AppPaths, CONFIG_DIR, DirFailure, ENGINE_CONFIG_FILE, ENGINE_LOG_FILE,
    ENGINE_PLUGINS_FILE, LOG_DIR,
};
