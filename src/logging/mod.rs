//! Logging and observability
//!
//! Structured logging with:
//! - Human-readable console output
//! - Configurable log levels (overridable with `RUST_LOG`)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use mediators::logging::init_logging;
//! use mediators::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a failed registration step for one mediator
///
/// # Example
///
/// ```no_run
/// use mediators::log_mediator_failure;
/// use mediators::domain::MediatorError;
///
/// let error = MediatorError::Other("connection reset".to_string());
/// log_mediator_failure!("urn:mediator:shr-mediator", "register", &error);
/// ```
#[macro_export]
macro_rules! log_mediator_failure {
    ($urn:expr, $step:expr, $error:expr) => {
        tracing::error!(
            urn = %$urn,
            step = $step,
            error = %$error,
            "Mediator step failed"
        );
    };
}
