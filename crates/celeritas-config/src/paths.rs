//! Application directory layout and startup directory creation.
//!
//! All paths live under the user's home directory. The layout is fixed:
//! an application root, a configuration subdirectory, and a log
//! subdirectory, plus the three engine files inside them.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application root directory name under the user's home directory.
pub const APP_DIR: &str = ".celeritas";
/// Configuration subdirectory name under the application root.
pub const CONFIG_DIR: &str = "config";
/// Log subdirectory name under the application root.
pub const LOG_DIR: &str = "log";

/// Engine configuration file name. The legacy name is kept so existing
/// installations keep working.
pub const ENGINE_CONFIG_FILE: &str = "ogre.cfg";
/// Engine plugin list file name.
pub const ENGINE_PLUGINS_FILE: &str = "ogre_plugins.cfg";
/// Engine log file name.
pub const ENGINE_LOG_FILE: &str = "ogre.log";

/// A directory that could not be created at startup.
///
/// Recorded, not raised: startup directory creation is best-effort and never
/// aborts the remaining entries.
#[derive(Debug, thiserror::Error)]
#[error("unable to create directory `{}`: {}", path.display(), source)]
pub struct DirFailure {
    /// The directory that failed to be created.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// The fixed set of application directories and engine file paths.
///
/// Constructed once at startup, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Application root: `<home>/.celeritas`.
    pub root: PathBuf,
    /// Configuration directory: `<home>/.celeritas/config`.
    pub config_dir: PathBuf,
    /// Log directory: `<home>/.celeritas/log`.
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the application paths from the `HOME` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] if `HOME` is unset or empty.
    pub fn resolve() -> Result<Self, ConfigError> {
        let home = env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::with_home(Path::new(&home)))
    }

    /// Build the application paths under an explicit home directory.
    ///
    /// Useful for testing and for sandboxed runs that must not touch the
    /// real home directory.
    pub fn with_home(home: &Path) -> Self {
        let root = home.join(APP_DIR);
        Self {
            config_dir: root.join(CONFIG_DIR),
            log_dir: root.join(LOG_DIR),
            root,
        }
    }

    /// Path of the engine configuration file.
    pub fn engine_config_file(&self) -> PathBuf {
        self.config_dir.join(ENGINE_CONFIG_FILE)
    }

    /// Path of the engine plugin list file.
    pub fn engine_plugins_file(&self) -> PathBuf {
        self.config_dir.join(ENGINE_PLUGINS_FILE)
    }

    /// Path of the engine log file.
    pub fn engine_log_file(&self) -> PathBuf {
        self.log_dir.join(ENGINE_LOG_FILE)
    }

    /// Create the application directories, root first.
    ///
    /// Each directory is created non-recursively with the platform default
    /// mode. A directory that already exists is silently accepted; every
    /// other failure is recorded and the remaining entries are still
    /// attempted. The returned failures are for reporting only — startup
    /// continues regardless. Safe to run on every process start.
    pub fn ensure_dirs(&self) -> Vec<DirFailure> {
        let mut failures = Vec::new();
        for dir in [&self.root, &self.config_dir, &self.log_dir] {
            if let Err(source) = fs::create_dir(dir) {
                if source.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() {
                    continue;
                }
                failures.push(DirFailure {
                    path: dir.clone(),
                    source,
                });
            }
        }
        failures
    }
}
