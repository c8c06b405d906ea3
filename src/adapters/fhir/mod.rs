//! FHIR adapter
//!
//! The request wrapper and envelope, patient lookups, Observation construction
//! and the parsing extension points.

pub mod client;
pub mod observation;
pub mod parsers;
pub mod patients;

pub use client::{FhirClient, FhirResponse, ResponseStatus, SERVER_ERROR_TEXT};
pub use observation::create_observation;
