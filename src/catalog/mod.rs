//! Mediator catalog
//!
//! The fixed, ordered set of mediators this deployment registers with the
//! switch. Descriptors are JSON documents under `config/mediators/`, embedded
//! at compile time.

use crate::domain::{MediatorDescriptor, MediatorError, Result};

/// Embedded descriptor sources, in registration order
const CATALOG: &[(&str, &str)] = &[
    ("shr.json", include_str!("../../config/mediators/shr.json")),
    (
        "advanced_search.json",
        include_str!("../../config/mediators/advanced_search.json"),
    ),
    ("mpi.json", include_str!("../../config/mediators/mpi.json")),
    ("ips.json", include_str!("../../config/mediators/ips.json")),
    (
        "fhir_base.json",
        include_str!("../../config/mediators/fhir_base.json"),
    ),
];

/// Parse every embedded mediator descriptor
///
/// # Errors
///
/// Returns [`MediatorError::Serialization`] naming the first descriptor that
/// fails to parse.
///
/// # Example
///
/// ```
/// let mediators = mediators::catalog::mediators().unwrap();
/// assert_eq!(mediators[0].urn, "urn:mediator:shr-mediator");
/// ```
pub fn mediators() -> Result<Vec<MediatorDescriptor>> {
    CATALOG
        .iter()
        .map(|(file, source)| parse_descriptor(file, source))
        .collect()
}

fn parse_descriptor(file: &str, source: &str) -> Result<MediatorDescriptor> {
    serde_json::from_str(source).map_err(|e| {
        MediatorError::Serialization(format!("Invalid mediator descriptor {file}: {e}"))
    })
}
