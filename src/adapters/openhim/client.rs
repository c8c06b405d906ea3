//! OpenHIM core API client
//!
//! Covers the calls the bridge makes against the switch: the authentication
//! challenge, mediator registration, channel creation and client provisioning.
//! There is no retry and, unless configured, no timeout.

use super::auth::{AuthChallenge, AuthHeaders};
use super::credentials::{generate_client_password, ClientRegistration};
use crate::config::{OpenHimConfig, SecretString};
use crate::domain::{MediatorDescriptor, MediatorError, OpenHimError, Result};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use url::Url;

/// Client for the OpenHIM core API
///
/// # Example
///
/// ```no_run
/// use mediators::adapters::openhim::OpenHimClient;
/// use mediators::config::OpenHimConfig;
///
/// # async fn example() -> mediators::domain::Result<()> {
/// let client = OpenHimClient::new(&OpenHimConfig::default())?;
/// let headers = client.get_token().await?;
/// println!("authenticated as {}", headers.username);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenHimClient {
    api_url: Url,
    username: String,
    password: SecretString,
    client: Client,
}

impl OpenHimClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &OpenHimConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            MediatorError::Configuration(format!("Invalid openhim.api_url '{}': {e}", config.api_url))
        })?;

        let mut client_builder = ClientBuilder::new();

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        if config.trust_self_signed {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            MediatorError::Configuration(format!("Failed to build OpenHIM HTTP client: {e}"))
        })?;

        Ok(Self {
            api_url,
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    /// Base URL of the core API
    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Resolve an API path below the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                MediatorError::Configuration(format!(
                    "openhim.api_url cannot be a base URL: {}",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request the authentication challenge for the configured user
    ///
    /// # Errors
    ///
    /// Returns [`OpenHimError::AuthenticationFailed`] on any non-200 answer.
    pub async fn authenticate(&self) -> Result<AuthChallenge> {
        let url = self.endpoint(&["authenticate", self.username.as_str()])?;

        tracing::debug!(username = %self.username, "Requesting OpenHIM authentication challenge");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OpenHimError::ConnectionFailed(e.to_string()))?;

        if resp.status() != StatusCode::OK {
            return Err(OpenHimError::AuthenticationFailed(format!(
                "User {} not found when authenticating with core API (status {})",
                self.username,
                resp.status().as_u16()
            ))
            .into());
        }

        resp.json::<AuthChallenge>()
            .await
            .map_err(|e| OpenHimError::InvalidResponse(e.to_string()).into())
    }

    /// Fresh authentication headers
    ///
    /// Re-authenticates on every call; nothing is cached.
    pub async fn get_token(&self) -> Result<AuthHeaders> {
        let challenge = self.authenticate().await?;
        Ok(AuthHeaders::generate(
            &self.username,
            &self.password,
            &challenge.salt,
        ))
    }

    /// Register (or update) a mediator with the switch
    ///
    /// # Errors
    ///
    /// Returns [`OpenHimError::RegistrationFailed`] unless the switch answers
    /// `201 Created`.
    pub async fn register_mediator(&self, mediator: &MediatorDescriptor) -> Result<()> {
        let headers = self.get_token().await?;
        let url = self.endpoint(&["mediators"])?;

        let resp = headers
            .apply(self.client.post(url))
            .json(mediator)
            .send()
            .await
            .map_err(|e| OpenHimError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenHimError::RegistrationFailed {
                urn: mediator.urn.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!(urn = %mediator.urn, name = %mediator.name, "Mediator registered");
        Ok(())
    }

    /// Create the mediator's default channel on the switch
    ///
    /// Returns the switch's response text.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the descriptor has no default channel and
    /// [`OpenHimError::ChannelInstallFailed`] on a non-2xx answer.
    pub async fn install_channel(&self, mediator: &MediatorDescriptor) -> Result<String> {
        let channel = mediator.default_channel().ok_or_else(|| {
            MediatorError::Validation(format!(
                "Mediator {} has no default channel configuration",
                mediator.urn
            ))
        })?;

        let headers = self.get_token().await?;
        let url = self.endpoint(&["channels"])?;

        let resp = headers
            .apply(self.client.post(url))
            .json(channel)
            .send()
            .await
            .map_err(|e| OpenHimError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(OpenHimError::ChannelInstallFailed {
                channel: channel.name.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!(
            urn = %mediator.urn,
            channel = %channel.name,
            response = %body,
            "Channel installed"
        );
        Ok(body)
    }

    /// Provision an API client with a salted password hash
    ///
    /// The client is granted every role. Returns the switch's raw response
    /// text whatever the status code.
    pub async fn create_client(&self, name: &str, password: &str) -> Result<String> {
        let headers = self.get_token().await?;
        let registration = ClientRegistration::new(name, generate_client_password(password));
        let url = self.endpoint(&["clients"])?;

        let resp = headers
            .apply(self.client.post(url))
            .json(&registration)
            .send()
            .await
            .map_err(|e| OpenHimError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| OpenHimError::InvalidResponse(e.to_string()))?;

        if status.is_success() {
            tracing::info!(client_id = %name, status = status.as_u16(), "Client created");
        } else {
            tracing::warn!(
                client_id = %name,
                status = status.as_u16(),
                response = %body,
                "Client creation not accepted"
            );
        }

        Ok(body)
    }
}
