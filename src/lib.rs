// Mediators - OpenHIM mediator registration and FHIR client helpers
// Copyright (c) 2026 Mediators Contributors
// Licensed under the MIT License

//! # Mediators
//!
//! Client-side integration layer for a health-information exchange built on
//! an OpenHIM interoperability switch and a FHIR server.
//!
//! ## Overview
//!
//! This library provides:
//! - **Registration** of the mediator catalog with the switch at startup,
//!   including each mediator's default channel
//! - **Authentication** against the switch's challenge endpoint
//! - **FHIR access** through a request wrapper that always answers with a
//!   uniform `{status, statusText, data}` envelope
//! - **Client provisioning** with salted SHA-512 credentials
//! - **Cross-border identifiers** of the form `JJ-YYYY-MM-XXXXX`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Registration routine and identifier generation
//! - [`adapters`] - OpenHIM and FHIR HTTP clients
//! - [`catalog`] - Embedded mediator descriptors
//! - [`domain`] - Domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mediators::config::load_config_or_env;
//! use mediators::core::registration::register_catalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_env("mediators.toml")?;
//! let report = register_catalog(&config.openhim).await?;
//!
//! println!("{} mediator(s) failed", report.failures());
//! # Ok(())
//! # }
//! ```
//!
//! ## FHIR Envelope
//!
//! ```rust,no_run
//! use mediators::adapters::fhir::FhirClient;
//! use mediators::config::FhirConfig;
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FhirClient::new(&FhirConfig::default())?;
//! let response = client.request("/Patient/123", Method::GET, None).await;
//!
//! if response.is_success() {
//!     println!("{}", response.data);
//! } else {
//!     eprintln!("{}", response.status_text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
