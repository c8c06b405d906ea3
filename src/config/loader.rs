//! TOML configuration loading
//!
//! A file is optional: without one the configuration is built from defaults
//! and environment variables alone.

use super::schema::MediatorsConfig;
use super::secret::secret_string;
use crate::domain::errors::MediatorError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// `${VAR}` references are expanded before parsing; environment overrides
/// are applied after parsing, then the result is validated.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is
/// unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use mediators::config::loader::load_config;
///
/// let config = load_config("mediators.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MediatorsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediatorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MediatorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MediatorsConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config);
    validate(config)
}

/// Builds configuration from environment variables only
///
/// Starts from defaults and applies the same overrides as [`load_config`].
/// Recognizes the deployment variables `OPENHIM_API_URL`, `OPENHIM_USERNAME`,
/// `OPENHIM_PASSWORD` and `FHIR_BASE_URL`.
pub fn load_config_from_env() -> Result<MediatorsConfig> {
    let mut config = MediatorsConfig::default();
    apply_env_overrides(&mut config);
    validate(config)
}

/// Loads `path` if it exists, otherwise falls back to [`load_config_from_env`]
pub fn load_config_or_env(path: impl AsRef<Path>) -> Result<MediatorsConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using environment only"
        );
        load_config_from_env()
    }
}

fn validate(config: MediatorsConfig) -> Result<MediatorsConfig> {
    config.validate().map_err(|e| {
        MediatorError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Expand `${VAR}` references from the environment
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns a configuration error naming every unset variable.
fn substitute_env_vars(input: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MediatorError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut missing: BTreeSet<String> = BTreeSet::new();

    let expanded: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            pattern
                .replace_all(line, |caps: &Captures| {
                    std::env::var(&caps[1]).unwrap_or_else(|_| {
                        missing.insert(caps[1].to_string());
                        caps[0].to_string()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing.is_empty() {
        let names: Vec<String> = missing.into_iter().collect();
        return Err(MediatorError::Configuration(format!(
            "Unset environment variables referenced in configuration: {}",
            names.join(", ")
        )));
    }

    Ok(expanded.join("\n"))
}

/// Applies environment variable overrides
///
/// Deployment variables (`OPENHIM_*`, `FHIR_BASE_URL`) are applied first, then
/// `MEDIATORS_<SECTION>_<KEY>` variables, which take precedence.
fn apply_env_overrides(config: &mut MediatorsConfig) {
    // Deployment variables
    if let Ok(val) = std::env::var("OPENHIM_API_URL") {
        config.openhim.api_url = val;
    }
    if let Ok(val) = std::env::var("OPENHIM_USERNAME") {
        config.openhim.username = val;
    }
    if let Ok(val) = std::env::var("OPENHIM_PASSWORD") {
        config.openhim.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("FHIR_BASE_URL") {
        config.fhir.base_url = val;
    }

    // Application overrides
    if let Ok(val) = std::env::var("MEDIATORS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // OpenHIM overrides
    if let Ok(val) = std::env::var("MEDIATORS_OPENHIM_API_URL") {
        config.openhim.api_url = val;
    }
    if let Ok(val) = std::env::var("MEDIATORS_OPENHIM_USERNAME") {
        config.openhim.username = val;
    }
    if let Ok(val) = std::env::var("MEDIATORS_OPENHIM_PASSWORD") {
        config.openhim.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("MEDIATORS_OPENHIM_TRUST_SELF_SIGNED") {
        config.openhim.trust_self_signed = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("MEDIATORS_OPENHIM_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.openhim.timeout_seconds = Some(secs);
        }
    }

    // FHIR overrides
    if let Ok(val) = std::env::var("MEDIATORS_FHIR_BASE_URL") {
        config.fhir.base_url = val;
    }
    if let Ok(val) = std::env::var("MEDIATORS_FHIR_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.fhir.timeout_seconds = Some(secs);
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MEDIATORS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MEDIATORS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MEDIATORS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
