//! Patient lookups
//!
//! Helpers that search the FHIR server by identifier and fetch patient
//! summaries. Search responses are decoded into typed bundles; a response
//! whose shape cannot be interpreted is reported as
//! [`FhirError::MalformedResponse`](crate::domain::FhirError::MalformedResponse).

use super::client::FhirClient;
use crate::domain::{Bundle, ClinicalResource, FhirError, Identifier, Patient, Result};
use reqwest::Method;
use std::collections::BTreeMap;

impl FhirClient {
    /// `GET /Patient?identifier=<identifier>`
    pub async fn search_patients(&self, identifier: &str) -> Result<Bundle> {
        let encoded: String = url::form_urlencoded::byte_serialize(identifier.as_bytes()).collect();
        let data = self
            .request(&format!("/Patient?identifier={encoded}"), Method::GET, None)
            .await
            .into_result()?;

        ClinicalResource::from_value(data)?.into_bundle()
    }

    /// First patient carrying `identifier`, or `None` if the search is empty
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the search bundle is
    /// malformed (no `total` and no `entry`, or matches without entries).
    pub async fn find_patient_by_identifier(&self, identifier: &str) -> Result<Option<Patient>> {
        let bundle = self.search_patients(identifier).await?;

        match bundle.first_match()? {
            None => Ok(None),
            Some(resource) => ClinicalResource::from_value(resource.clone())?
                .into_patient()
                .map(Some),
        }
    }

    /// Identifiers of the patient matching `identifier`, keyed by each identifier's own `id`
    ///
    /// Returns `None` if no patient matches. Identifiers without an `id` are
    /// skipped.
    pub async fn parse_identifiers(
        &self,
        identifier: &str,
    ) -> Result<Option<BTreeMap<String, Identifier>>> {
        let Some(patient) = self.find_patient_by_identifier(identifier).await? else {
            return Ok(None);
        };

        let mut identifiers = BTreeMap::new();
        for id in patient.identifier {
            match id.id.clone() {
                Some(key) => {
                    identifiers.insert(key, id);
                }
                None => {
                    tracing::warn!(
                        patient_id = ?patient.id,
                        system = ?id.system,
                        "Skipping identifier without id"
                    );
                }
            }
        }

        Ok(Some(identifiers))
    }

    /// Patient registered under a cross-border ID
    ///
    /// Any failure is logged and reported as `None`.
    pub async fn get_patient_by_cross_border_id(&self, cross_border_id: &str) -> Option<Patient> {
        match self.find_patient_by_identifier(cross_border_id).await {
            Ok(patient) => patient,
            Err(e) => {
                tracing::error!(
                    cross_border_id = %cross_border_id,
                    error = %e,
                    "Patient lookup by cross-border ID failed"
                );
                None
            }
        }
    }

    /// Patient summary document (`$summary` operation) for a cross-border ID
    ///
    /// Returns `None` if the patient is unknown or any step fails.
    pub async fn get_summary_for_cross_border_id(&self, cross_border_id: &str) -> Option<Bundle> {
        let patient = self.get_patient_by_cross_border_id(cross_border_id).await?;

        match self.fetch_summary(&patient).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::error!(
                    cross_border_id = %cross_border_id,
                    error = %e,
                    "Patient summary retrieval failed"
                );
                None
            }
        }
    }

    async fn fetch_summary(&self, patient: &Patient) -> Result<Bundle> {
        let patient_id = patient.id.as_deref().ok_or_else(|| FhirError::MissingField {
            resource_type: "Patient".to_string(),
            field: "id".to_string(),
        })?;

        let data = self
            .request(&format!("/Patient/{patient_id}/$summary"), Method::GET, None)
            .await
            .into_result()?;

        ClinicalResource::from_value(data)?.into_bundle()
    }
}
