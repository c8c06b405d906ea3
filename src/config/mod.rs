//! Configuration management.
//!
//! # Overview
//!
//! Configuration comes from an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Deployment variables (`OPENHIM_API_URL`, `OPENHIM_USERNAME`,
//!   `OPENHIM_PASSWORD`, `FHIR_BASE_URL`)
//! - `MEDIATORS_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [openhim]
//! api_url = "https://openhim-core:8080"
//! username = "root@openhim.org"
//! password = "${OPENHIM_PASSWORD}"
//! trust_self_signed = true
//!
//! [fhir]
//! base_url = "http://hapi-fhir:8080/fhir"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mediators::config::load_config_or_env;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_env("mediators.toml")?;
//! println!("OpenHIM: {}", config.openhim.api_url);
//! println!("FHIR: {}", config.fhir.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_env, load_config_or_env};
pub use schema::{ApplicationConfig, FhirConfig, LoggingConfig, MediatorsConfig, OpenHimConfig};
pub use secret::{secret_string, SecretString, SecretValue};
