//! Resource parsing extension points
//!
//! Named hooks for turning raw FHIR documents into bridge-level records and
//! back. None of them transforms anything yet; each returns `None` and callers
//! must handle that.

use serde_json::Value;

/// Parse an Observation document
pub fn parse_observation_resource(data: &Value) -> Option<Value> {
    unimplemented_hook("parse_observation_resource", data)
}

/// Parse an Encounter document
pub fn parse_encounter_resource(data: &Value) -> Option<Value> {
    unimplemented_hook("parse_encounter_resource", data)
}

/// Parse a Medication / MedicationStatement document
pub fn parse_medication(data: &Value) -> Option<Value> {
    unimplemented_hook("parse_medication", data)
}

/// Parse a Bundle into its component resources
pub fn parse_fhir_bundle(data: &Value) -> Option<Value> {
    unimplemented_hook("parse_fhir_bundle", data)
}

/// Assemble a Bundle from bridge-level records
pub fn generate_fhir_bundle(params: &Value) -> Option<Value> {
    unimplemented_hook("generate_fhir_bundle", params)
}

fn unimplemented_hook(name: &str, data: &Value) -> Option<Value> {
    let resource_type = data
        .get("resourceType")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown");

    tracing::debug!(
        hook = name,
        resource_type = resource_type,
        "Parsing hook has no implementation"
    );
    None
}
