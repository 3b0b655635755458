//! Structured logging for the Celeritas application.
//!
//! Provides filterable logging via the `tracing` ecosystem: console output
//! with timestamps and module paths, plus a plain-text file layer writing the
//! engine log file. Integrates with the configuration system for runtime log
//! level control.

use std::path::Path;

use celeritas_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Sets up:
/// - console output with uptime timestamps, module paths, and severity levels
/// - a plain-text file layer writing `log_file` (no ANSI codes), when the
///   file can be created — otherwise console-only
/// - environment-based filtering (respects `RUST_LOG`), with the configured
///   log level as the fallback
///
/// # Examples
///
/// ```no_run
/// use celeritas_config::Config;
/// use celeritas_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("/tmp/engine.log")), Some(&config));
/// ```
pub fn init_logging(log_file: Option<&Path>, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => default_filter_string(),
    };

    // RUST_LOG wins over the configured level.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_file) = log_file
        && log_file
            .parent()
            .is_none_or(|dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok())
        && let Ok(file) = std::fs::File::create(log_file)
    {
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime());

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Enables `info` for all targets by default and quiets `wgpu`/`naga` down
/// to `warn` to reduce noise.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(default_filter_string())
}

fn default_filter_string() -> String {
    "info,wgpu=warn,naga=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_level_overrides_default() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        // The configured level becomes the fallback filter string.
        assert_eq!(config.debug.log_level, "debug");
        let filter = EnvFilter::new(&config.debug.log_level);
        assert!(format!("{}", filter).contains("debug"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,celeritas_render=trace",
            "warn,celeritas_config=debug",
            "error",
        ];
        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_creation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file = temp_dir.path().join("log").join("engine.log");

        // The parent directory does not exist yet; the init path creates it.
        std::fs::create_dir_all(log_file.parent().unwrap()).unwrap();
        std::fs::File::create(&log_file).unwrap();
        assert!(log_file.exists());
    }
}
