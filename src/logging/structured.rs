//! Subscriber setup
//!
//! Human-readable output always goes to the console. With
//! `logging.local_enabled` a second, JSON-formatted copy is written to
//! `<local_path>/mediators.log` through a non-blocking rolling appender.

use crate::config::LoggingConfig;
use crate::domain::{MediatorError, Result};
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "mediators.log";

/// Flushes the file writer when dropped; hold it until exit
#[must_use]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns a configuration error for an unknown level or rotation, and an
/// I/O error if the log directory cannot be created.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("mediators={level}")))
    };

    let (file_layer, file_guard) = if config.local_enabled {
        let appender = file_appender(config)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(writer)
            .with_filter(filter());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(filter()))
        .with(file_layer)
        .init();

    tracing::debug!(
        level = %level,
        file = config.local_enabled,
        path = %config.local_path,
        "Logging ready"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn file_appender(config: &LoggingConfig) -> Result<RollingFileAppender> {
    let rotation = parse_rotation(&config.local_rotation)?;

    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        MediatorError::Io(format!(
            "Cannot create log directory {}: {e}",
            config.local_path
        ))
    })?;

    Ok(RollingFileAppender::new(
        rotation,
        &config.local_path,
        LOG_FILE_NAME,
    ))
}

fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level).map_err(|_| {
        MediatorError::Configuration(format!(
            "Unknown log level '{level}' (expected trace, debug, info, warn or error)"
        ))
    })
}

fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        "never" => Ok(Rotation::NEVER),
        other => Err(MediatorError::Configuration(format!(
            "Unknown log rotation '{other}' (expected daily, hourly or never)"
        ))),
    }
}
