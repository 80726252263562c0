//! Logging configuration using the tracing ecosystem.
//!
//! Logs always go to a file: writing to stdout or stderr would corrupt the
//! terminal UI. Files rotate daily and the level comes from `RUST_LOG` unless
//! overridden on the command line.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if neither `--log-level` nor RUST_LOG is set.
const DEFAULT_LOG_FILTER: &str = "medicitas=info,warn";

/// File name prefix for the rolling log files.
const LOG_FILE_NAME: &str = "medicitas.log";

/// Options for [`init`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Directory for log files. Defaults to the local data directory.
    pub dir: Option<PathBuf>,
    /// Filter directive overriding `RUST_LOG`, e.g. `medicitas=debug`.
    pub filter: Option<String>,
}

/// Keeps the background log writer alive.
///
/// Buffered lines are flushed when this is dropped, so hold it until the
/// application exits.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    /// Directory the log files are written to.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Initialize the logging system.
///
/// Log files are stored in the platform-specific local data directory unless
/// `options.dir` is set:
/// - Linux: `~/.local/share/medicitas/logs/`
/// - macOS: `~/Library/Application Support/medicitas/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\medicitas\logs\`
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created, or
/// if a global subscriber is already installed.
pub fn init(options: &LogOptions) -> anyhow::Result<LoggingGuard> {
    let log_dir = match &options.dir {
        Some(dir) => dir.clone(),
        None => default_log_directory()?,
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(options.filter.as_deref()));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "MediCitas starting up");

    Ok(LoggingGuard {
        _worker: worker,
        log_dir,
    })
}

/// Build the level filter.
///
/// Precedence: explicit override, then `RUST_LOG`, then the default. An
/// override that does not parse is ignored.
fn build_filter(override_directive: Option<&str>) -> EnvFilter {
    override_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Get the default log directory path.
fn default_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("medicitas").join("logs"))
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("MediCitas shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_log_directory_structure() {
        let dir = default_log_directory().unwrap();
        assert!(dir.ends_with("medicitas/logs"));
    }

    #[test]
    #[serial]
    fn test_override_wins_over_env() {
        std::env::set_var("RUST_LOG", "warn");
        let filter = build_filter(Some("medicitas=trace"));
        std::env::remove_var("RUST_LOG");
        assert_eq!(filter.to_string(), "medicitas=trace");
    }

    #[test]
    #[serial]
    fn test_env_used_without_override() {
        std::env::set_var("RUST_LOG", "medicitas=debug");
        let filter = build_filter(None);
        std::env::remove_var("RUST_LOG");
        assert_eq!(filter.to_string(), "medicitas=debug");
    }

    #[test]
    #[serial]
    fn test_default_filter() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(None);
        assert!(filter.to_string().contains("medicitas=info"));
    }
}
