//! Logging and tracing setup.
//!
//! Two sinks: human-readable events on stderr, and JSON lines in a log file.
//! Stdout is never written to, since it carries command output and the MCP
//! transport.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rymownik_core::config::user_data_local_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "rymownik.log";
const ENV_LOG_PATH: &str = "RYMOWNIK_LOG_PATH";
const ENV_LOG_DIR: &str = "RYMOWNIK_LOG_DIR";

/// Where file logs go and how chatty stderr is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file, never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
    /// Mirror everything the filter lets through on stderr, not just warnings.
    pub verbose_stderr: bool,
}

impl ObservabilityConfig {
    /// Read `RYMOWNIK_LOG_PATH` and `RYMOWNIK_LOG_DIR`, falling back to the
    /// configured directory and then the platform data dir.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path,
            log_dir: env_dir.or(config_log_dir).or_else(default_log_dir),
            verbose_stderr: false,
        }
    }

    /// Show events below `warn` on stderr too.
    #[must_use]
    pub const fn with_verbose_stderr(mut self, verbose: bool) -> Self {
        self.verbose_stderr = verbose;
        self
    }
}

fn default_log_dir() -> Option<PathBuf> {
    user_data_local_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// Build the event filter. `RUST_LOG` wins; otherwise the CLI flags pick the
/// level, and the configured level is the fallback.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, default_level))
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// File logging is best effort: when the log location cannot be prepared the
/// subscriber runs with stderr only. The returned guard flushes the file
/// writer on drop and must live until the program exits.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_level = if config.verbose_stderr {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    let (dir, rotation, prefix) = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => (
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new(".")),
            Rotation::NEVER,
            path.file_name()?.to_str()?,
        ),
        (None, Some(dir)) => (dir.as_path(), Rotation::DAILY, LOG_FILE_PREFIX),
        (None, None) => return None,
    };

    std::fs::create_dir_all(dir).ok()?;
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .build(dir)
        .ok()
}
