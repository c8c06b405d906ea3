//! Observation construction

use crate::domain::{CodeableConcept, Coding, Observation, Reference};
use chrono::{SecondsFormat, Utc};
use serde_json::Map;

/// Build an Observation for `patient_id` coded with `codings`
///
/// Both `effectiveDateTime` and `issued` are stamped with the current time.
/// The encounter ID is accepted but not written to the resource. No request
/// is made.
///
/// # Example
///
/// ```
/// use mediators::adapters::fhir::create_observation;
/// use mediators::domain::Coding;
///
/// let observation = create_observation(
///     "123",
///     vec![Coding::new("http://loinc.org", "8867-4")],
///     "enc-1",
/// );
/// assert_eq!(observation.subject.reference, "Patient/123");
/// ```
pub fn create_observation(
    patient_id: &str,
    codings: Vec<Coding>,
    _encounter_id: &str,
) -> Observation {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    Observation {
        resource_type: "Observation".to_string(),
        id: None,
        code: CodeableConcept {
            coding: codings,
            extra: Map::new(),
        },
        subject: Reference {
            reference: format!("Patient/{patient_id}"),
            extra: Map::new(),
        },
        effective_date_time: Some(now.clone()),
        issued: Some(now),
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_observation_shape() {
        let codings = vec![Coding::new("http://loinc.org", "29463-7").with_display("Body weight")];
        let observation = create_observation("p-42", codings.clone(), "enc-7");

        let value = serde_json::to_value(&observation).unwrap();
        assert_eq!(value["resourceType"], "Observation");
        assert_eq!(value["subject"]["reference"], "Patient/p-42");
        assert_eq!(value["code"]["coding"], serde_json::to_value(&codings).unwrap());
        assert!(value.get("encounter").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_encounter_id_not_emitted() {
        let observation = create_observation("p-1", vec![], "enc-99");
        let text = serde_json::to_string(&observation).unwrap();
        assert!(!text.contains("enc-99"));
        assert!(!text.contains("Encounter"));
    }

    #[test]
    fn test_observation_timestamps() {
        let observation = create_observation("p-1", vec![], "enc-1");
        let effective = observation.effective_date_time.unwrap();
        assert_eq!(Some(effective.clone()), observation.issued);
        assert!(DateTime::parse_from_rfc3339(&effective).is_ok());
        assert!(effective.ends_with('Z'));
    }
}
