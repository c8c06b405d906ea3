//! Domain error types
//!
//! This module defines the error hierarchy for the mediator bridge.
//! Errors carry plain strings so callers never see third-party HTTP client types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the crate.
/// It wraps the switch and FHIR error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MediatorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// OpenHIM (interoperability switch) errors
    #[error("OpenHIM error: {0}")]
    OpenHim(#[from] OpenHimError),

    /// FHIR server errors
    #[error("FHIR error: {0}")]
    Fhir(#[from] FhirError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// OpenHIM-specific errors
///
/// Errors that occur when talking to the switch's core API.
#[derive(Debug, Error)]
pub enum OpenHimError {
    /// Failed to reach the switch
    #[error("Failed to connect to OpenHIM: {0}")]
    ConnectionFailed(String),

    /// Authentication challenge was refused
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Mediator registration was not accepted
    #[error("Mediator {urn} registration failed: {status} - {body}")]
    RegistrationFailed {
        urn: String,
        status: u16,
        body: String,
    },

    /// Channel creation was not accepted
    #[error("Channel '{channel}' installation failed: {status} - {body}")]
    ChannelInstallFailed {
        channel: String,
        status: u16,
        body: String,
    },

    /// Response could not be interpreted
    #[error("Invalid response from OpenHIM: {0}")]
    InvalidResponse(String),
}

/// FHIR-specific errors
#[derive(Debug, Error)]
pub enum FhirError {
    /// The request wrapper returned an error envelope
    #[error("FHIR request failed: {status_text} ({detail})")]
    RequestFailed { status_text: String, detail: String },

    /// The server answered with a document of an unexpected shape
    #[error("Malformed FHIR response: {0}")]
    MalformedResponse(String),

    /// A required field was absent from a resource
    #[error("Missing field '{field}' on {resource_type}")]
    MissingField {
        resource_type: String,
        field: String,
    },
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MediatorError {
    fn from(err: toml::de::Error) -> Self {
        MediatorError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mediator_error_display() {
        let err = MediatorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_openhim_error_conversion() {
        let openhim_err = OpenHimError::ConnectionFailed("Network error".to_string());
        let err: MediatorError = openhim_err.into();
        assert!(matches!(err, MediatorError::OpenHim(_)));
    }

    #[test]
    fn test_fhir_error_conversion() {
        let fhir_err = FhirError::MalformedResponse("no entry".to_string());
        let err: MediatorError = fhir_err.into();
        assert!(matches!(err, MediatorError::Fhir(_)));
    }

    #[test]
    fn test_registration_failed_display() {
        let err = OpenHimError::RegistrationFailed {
            urn: "urn:mediator:shr".to_string(),
            status: 400,
            body: "bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mediator urn:mediator:shr registration failed: 400 - bad"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = FhirError::MissingField {
            resource_type: "Patient".to_string(),
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "Missing field 'id' on Patient");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MediatorError = toml_err.into();
        assert!(matches!(err, MediatorError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
