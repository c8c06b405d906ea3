//! Configuration schema types
//!
//! This module defines the configuration structure for the mediator bridge.

use crate::config::{secret_string, SecretString};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Maps to the TOML file. Every section has defaults, so an empty file (or no
/// file plus environment variables) is a valid starting point.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MediatorsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// OpenHIM core API connection
    #[serde(default)]
    pub openhim: OpenHimConfig,

    /// FHIR server connection
    #[serde(default)]
    pub fhir: FhirConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MediatorsConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.openhim.validate()?;
        self.fhir.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// OpenHIM core API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenHimConfig {
    /// Base URL of the core API, e.g. `https://openhim-core:8080`
    #[serde(default = "default_openhim_api_url")]
    pub api_url: String,

    /// API user the bridge authenticates as
    #[serde(default = "default_openhim_username")]
    pub username: String,

    /// API user password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// Accept self-signed certificates from the core API
    ///
    /// OpenHIM ships with a self-signed certificate, so this defaults to `true`.
    #[serde(default = "default_true")]
    pub trust_self_signed: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl OpenHimConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("openhim.api_url", &self.api_url)?;

        if self.username.trim().is_empty() {
            return Err("openhim.username cannot be empty".to_string());
        }

        if self.password.expose_secret().is_empty() {
            return Err("openhim.password cannot be empty".to_string());
        }

        if self.timeout_seconds == Some(0) {
            return Err("openhim.timeout_seconds must be > 0 when set".to_string());
        }

        Ok(())
    }
}

impl Default for OpenHimConfig {
    fn default() -> Self {
        Self {
            api_url: default_openhim_api_url(),
            username: default_openhim_username(),
            password: default_password(),
            trust_self_signed: true,
            timeout_seconds: None,
        }
    }
}

/// FHIR server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FhirConfig {
    /// Base URL resource paths are appended to, e.g. `http://hapi:8080/fhir`
    #[serde(default = "default_fhir_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl FhirConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("fhir.base_url", &self.base_url)?;

        if self.timeout_seconds == Some(0) {
            return Err("fhir.timeout_seconds must be > 0 when set".to_string());
        }

        Ok(())
    }
}

impl Default for FhirConfig {
    fn default() -> Self {
        Self {
            base_url: default_fhir_base_url(),
            timeout_seconds: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(format!("{field} must start with http:// or https://"));
    }

    url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_openhim_api_url() -> String {
    "https://localhost:8080".to_string()
}

fn default_openhim_username() -> String {
    "root@openhim.org".to_string()
}

fn default_password() -> SecretString {
    secret_string(String::new())
}

fn default_fhir_base_url() -> String {
    "http://localhost:8080/fhir".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "/var/log/mediators".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
