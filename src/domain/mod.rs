//! Domain models and types for the mediator bridge.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CrossBorderId`])
//! - **Mediator descriptors** ([`MediatorDescriptor`], [`ChannelDefinition`])
//! - **FHIR resource models** ([`Patient`], [`Observation`], [`Bundle`], [`ClinicalResource`])
//! - **Error types** ([`MediatorError`], [`OpenHimError`], [`FhirError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MediatorError>`]:
//!
//! ```rust
//! use mediators::domain::{CrossBorderId, MediatorError, Result};
//!
//! fn example() -> Result<CrossBorderId> {
//!     CrossBorderId::new("KE-2024-05-1A2B3").map_err(MediatorError::Validation)
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod mediator;
pub mod resources;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{FhirError, MediatorError, OpenHimError};
pub use ids::CrossBorderId;
pub use mediator::{ChannelDefinition, MediatorDescriptor, RouteDefinition};
pub use resources::{
    Bundle, BundleEntry, ClinicalResource, CodeableConcept, Coding, Identifier, Observation,
    Patient, Reference,
};
pub use result::Result;
