//! External system integrations.
//!
//! - [`openhim`] - OpenHIM core API (authentication, mediators, channels, clients)
//! - [`fhir`] - FHIR server (request envelope, patient lookups, resource helpers)
//!
//! # OpenHIM Adapter
//!
//! ```rust,no_run
//! use mediators::adapters::openhim::OpenHimClient;
//! use mediators::config::{secret_string, OpenHimConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OpenHimConfig {
//!     api_url: "https://openhim-core:8080".to_string(),
//!     username: "root@openhim.org".to_string(),
//!     password: secret_string("password".to_string()),
//!     trust_self_signed: true,
//!     timeout_seconds: None,
//! };
//!
//! let client = OpenHimClient::new(&config)?;
//! let response = client.create_client("emr-a", "client-password").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # FHIR Adapter
//!
//! ```rust,no_run
//! use mediators::adapters::fhir::FhirClient;
//! use mediators::config::FhirConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FhirClient::new(&FhirConfig::default())?;
//! if let Some(summary) = client.get_summary_for_cross_border_id("KE-2024-05-1A2B3").await {
//!     println!("{} entries", summary.entry.map(|e| e.len()).unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```

pub mod fhir;
pub mod openhim;
