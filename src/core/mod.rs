//! Core routines
//!
//! - [`registration`] - Startup registration of the mediator catalog
//! - [`identifiers`] - Cross-border identifier generation

pub mod identifiers;
pub mod registration;

pub use identifiers::{make_cross_border_id, make_cross_border_id_at};
pub use registration::{initialize, register_catalog, MediatorOutcome, RegistrationReport};
