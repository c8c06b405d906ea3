//! Mediator registration
//!
//! Startup routine that authenticates with the switch, then registers every
//! catalog mediator and installs its default channel. Mediators are processed
//! concurrently; each step's outcome is collected into a [`RegistrationReport`]
//! and one mediator's failure never stops another. Nothing is retried.

use crate::adapters::openhim::OpenHimClient;
use crate::catalog;
use crate::config::OpenHimConfig;
use crate::domain::{MediatorDescriptor, Result};
use crate::log_mediator_failure;
use futures::future::join_all;

/// Outcome of registering one mediator
#[derive(Debug)]
pub struct MediatorOutcome {
    pub urn: String,
    pub name: String,

    /// Result of `POST /mediators`
    pub registration: Result<()>,

    /// Result of `POST /channels`, with the switch's response text
    pub channel: Result<String>,
}

impl MediatorOutcome {
    /// Both steps succeeded
    pub fn is_success(&self) -> bool {
        self.registration.is_ok() && self.channel.is_ok()
    }
}

/// Outcome of a startup registration run
#[derive(Debug)]
pub struct RegistrationReport {
    /// Authentication error, if the initial challenge failed
    pub auth_error: Option<String>,

    /// Per-mediator outcomes, in catalog order
    pub outcomes: Vec<MediatorOutcome>,
}

impl RegistrationReport {
    /// Whether the initial authentication succeeded
    pub fn authenticated(&self) -> bool {
        self.auth_error.is_none()
    }

    /// Number of mediators with at least one failed step
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    /// Authentication and every step for every mediator succeeded
    pub fn is_complete(&self) -> bool {
        self.authenticated() && self.failures() == 0
    }
}

/// Authenticate, then register and install channels for `mediators`
///
/// An authentication failure is logged and recorded, and registration still
/// proceeds.
pub async fn initialize(client: &OpenHimClient, mediators: &[MediatorDescriptor]) -> RegistrationReport {
    let auth_error = match client.authenticate().await {
        Ok(_) => {
            tracing::info!(api_url = %client.api_url(), "OpenHIM authenticated successfully");
            None
        }
        Err(e) => {
            tracing::error!(
                api_url = %client.api_url(),
                error = %e,
                "OpenHIM authentication failed, continuing with registration"
            );
            Some(e.to_string())
        }
    };

    let outcomes = join_all(mediators.iter().map(|m| install_mediator(client, m))).await;

    let report = RegistrationReport {
        auth_error,
        outcomes,
    };

    tracing::info!(
        mediators = report.outcomes.len(),
        failures = report.failures(),
        authenticated = report.authenticated(),
        "Mediator registration finished"
    );

    report
}

/// Build a client from configuration and register the embedded catalog
///
/// # Errors
///
/// Returns an error only if the client cannot be built or the catalog does
/// not parse; switch failures are reported in the returned report.
pub async fn register_catalog(config: &OpenHimConfig) -> Result<RegistrationReport> {
    let client = OpenHimClient::new(config)?;
    let mediators = catalog::mediators()?;
    Ok(initialize(&client, &mediators).await)
}

async fn install_mediator(client: &OpenHimClient, mediator: &MediatorDescriptor) -> MediatorOutcome {
    let (registration, channel) = tokio::join!(
        client.register_mediator(mediator),
        client.install_channel(mediator)
    );

    if let Err(e) = &registration {
        log_mediator_failure!(&mediator.urn, "register", e);
    }
    if let Err(e) = &channel {
        log_mediator_failure!(&mediator.urn, "install_channel", e);
    }

    MediatorOutcome {
        urn: mediator.urn.clone(),
        name: mediator.name.clone(),
        registration,
        channel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediatorError;

    fn outcome(registration: Result<()>, channel: Result<String>) -> MediatorOutcome {
        MediatorOutcome {
            urn: "urn:mediator:test".to_string(),
            name: "Test".to_string(),
            registration,
            channel,
        }
    }

    #[test]
    fn test_report_complete() {
        let report = RegistrationReport {
            auth_error: None,
            outcomes: vec![outcome(Ok(()), Ok("created".to_string()))],
        };
        assert!(report.is_complete());
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn test_report_counts_partial_failures() {
        let report = RegistrationReport {
            auth_error: None,
            outcomes: vec![
                outcome(Ok(()), Ok("created".to_string())),
                outcome(
                    Ok(()),
                    Err(MediatorError::Validation("no channel".to_string())),
                ),
                outcome(Err(MediatorError::Other("down".to_string())), Ok(String::new())),
            ],
        };
        assert_eq!(report.failures(), 2);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_report_incomplete_without_auth() {
        let report = RegistrationReport {
            auth_error: Some("refused".to_string()),
            outcomes: vec![],
        };
        assert!(!report.authenticated());
        assert!(!report.is_complete());
    }
}
