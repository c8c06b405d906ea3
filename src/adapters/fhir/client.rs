//! FHIR REST client
//!
//! [`FhirClient::request`] is the single primitive every helper is built on.
//! It never returns an error: failures come back as a [`FhirResponse`] whose
//! status is [`ResponseStatus::Error`], so callers check the envelope instead
//! of propagating.

use crate::config::FhirConfig;
use crate::domain::{FhirError, MediatorError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Status text used when the server could not be reached or its body could not be read
pub const SERVER_ERROR_TEXT: &str = "FHIRFetch: server error";

/// Outcome tag of a [`FhirResponse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirResponse {
    pub status: ResponseStatus,

    /// HTTP reason phrase, or [`SERVER_ERROR_TEXT`]
    pub status_text: String,

    /// Parsed response body on success; body or failure cause on error
    pub data: Value,
}

impl FhirResponse {
    fn success(status_text: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            status_text: status_text.into(),
            data,
        }
    }

    fn error(status_text: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Error,
            status_text: status_text.into(),
            data,
        }
    }

    /// Whether the request succeeded
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Convert the envelope into a `Result`
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::RequestFailed`] for an error envelope
    pub fn into_result(self) -> Result<Value> {
        match self.status {
            ResponseStatus::Success => Ok(self.data),
            ResponseStatus::Error => {
                let detail = match self.data {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Err(FhirError::RequestFailed {
                    status_text: self.status_text,
                    detail,
                }
                .into())
            }
        }
    }
}

/// Client for the FHIR server
///
/// # Example
///
/// ```no_run
/// use mediators::adapters::fhir::FhirClient;
/// use mediators::config::FhirConfig;
/// use reqwest::Method;
///
/// # async fn example() -> mediators::domain::Result<()> {
/// let client = FhirClient::new(&FhirConfig::default())?;
/// let response = client.request("/metadata", Method::GET, None).await;
/// if response.is_success() {
///     println!("{}", response.data["fhirVersion"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FhirClient {
    base_url: String,
    client: Client,
}

impl FhirClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &FhirConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new();

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        let client = client_builder.build().map_err(|e| {
            MediatorError::Configuration(format!("Failed to build FHIR HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to `base_url + path`
    ///
    /// `body` is serialized as JSON for every method except GET and DELETE,
    /// which never carry a body.
    pub async fn request(&self, path: &str, method: Method, body: Option<&Value>) -> FhirResponse {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(url = %url, method = %method, "FHIR request");

        let carries_body = method != Method::GET && method != Method::DELETE;
        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if carries_body {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "FHIR request failed");
                return FhirResponse::error(SERVER_ERROR_TEXT, Value::String(e.to_string()));
            }
        };

        let status = resp.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to read FHIR response body");
                return FhirResponse::error(SERVER_ERROR_TEXT, Value::String(e.to_string()));
            }
        };

        let parsed = if text.trim().is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str::<Value>(&text)
        };

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "FHIR server returned an error status");
            let data = parsed.unwrap_or(Value::String(text));
            return FhirResponse::error(status_text, data);
        }

        match parsed {
            Ok(data) => FhirResponse::success(status_text, data),
            Err(e) => {
                tracing::error!(url = %url, error = %e, "FHIR response is not valid JSON");
                FhirResponse::error(SERVER_ERROR_TEXT, Value::String(e.to_string()))
            }
        }
    }
}
