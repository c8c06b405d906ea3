//! FHIR resource models
//!
//! Only the fields the bridge reads are typed; everything else rides along in
//! a flattened `extra` map so documents round-trip to the server unchanged.

use super::errors::FhirError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A FHIR resource classified by its `resourceType`
#[derive(Debug, Clone, PartialEq)]
pub enum ClinicalResource {
    Patient(Patient),
    Observation(Observation),
    Bundle(Bundle),
    /// Any resource type the bridge has no typed model for
    Other { resource_type: String, body: Value },
}

impl ClinicalResource {
    /// Classify a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::MalformedResponse`] if the document has no string
    /// `resourceType`, or if a known resource type does not match its model.
    ///
    /// # Example
    ///
    /// ```
    /// use mediators::domain::ClinicalResource;
    /// use serde_json::json;
    ///
    /// let resource = ClinicalResource::from_value(json!({
    ///     "resourceType": "Patient",
    ///     "id": "p-1"
    /// })).unwrap();
    /// assert_eq!(resource.resource_type(), "Patient");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let resource_type = value
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                FhirError::MalformedResponse("document has no resourceType".to_string())
            })?
            .to_string();

        let malformed = |e: serde_json::Error| {
            FhirError::MalformedResponse(format!("invalid {resource_type} resource: {e}"))
        };

        let resource = match resource_type.as_str() {
            "Patient" => Self::Patient(serde_json::from_value(value).map_err(malformed)?),
            "Observation" => Self::Observation(serde_json::from_value(value).map_err(malformed)?),
            "Bundle" => Self::Bundle(serde_json::from_value(value).map_err(malformed)?),
            _ => Self::Other {
                resource_type: resource_type.clone(),
                body: value,
            },
        };

        Ok(resource)
    }

    /// The resource's `resourceType`
    pub fn resource_type(&self) -> &str {
        match self {
            Self::Patient(_) => "Patient",
            Self::Observation(_) => "Observation",
            Self::Bundle(_) => "Bundle",
            Self::Other { resource_type, .. } => resource_type,
        }
    }

    /// Unwrap a Patient, rejecting any other resource type
    pub fn into_patient(self) -> Result<Patient> {
        match self {
            Self::Patient(patient) => Ok(patient),
            other => Err(FhirError::MalformedResponse(format!(
                "expected Patient, got {}",
                other.resource_type()
            ))
            .into()),
        }
    }

    /// Unwrap a Bundle, rejecting any other resource type
    pub fn into_bundle(self) -> Result<Bundle> {
        match self {
            Self::Bundle(bundle) => Ok(bundle),
            other => Err(FhirError::MalformedResponse(format!(
                "expected Bundle, got {}",
                other.resource_type()
            ))
            .into()),
        }
    }
}

/// FHIR Patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub identifier: Vec<Identifier>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// FHIR Identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// FHIR Coding
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coding {
    /// Coding from a system and code
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Sets the display text
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default)]
    pub coding: Vec<Coding>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// FHIR Observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub code: CodeableConcept,

    pub subject: Reference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// FHIR Bundle (searchset, document, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub bundle_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bundle {
    /// First matched resource of a search result
    ///
    /// Returns `Ok(None)` when the bundle reports no matches. A bundle that has
    /// neither `total` nor `entry`, or that reports matches without carrying an
    /// entry resource, is rejected as malformed.
    pub fn first_match(&self) -> Result<Option<&Value>> {
        let entries = self.entry.as_deref();

        if self.total.is_none() && entries.is_none() {
            return Err(FhirError::MalformedResponse(
                "search bundle carries neither total nor entry".to_string(),
            )
            .into());
        }

        let has_matches =
            self.total.unwrap_or(0) > 0 || entries.map(|e| !e.is_empty()).unwrap_or(false);
        if !has_matches {
            return Ok(None);
        }

        entries
            .and_then(|e| e.first())
            .and_then(|e| e.resource.as_ref())
            .map(Some)
            .ok_or_else(|| {
                FhirError::MalformedResponse(
                    "search bundle reports matches but has no entry resource".to_string(),
                )
                .into()
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
