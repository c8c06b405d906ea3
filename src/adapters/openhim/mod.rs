//! OpenHIM adapter
//!
//! Authentication headers, client credential hashing, and the core API client.

pub mod auth;
pub mod client;
pub mod credentials;

pub use auth::{AuthChallenge, AuthHeaders};
pub use client::OpenHimClient;
pub use credentials::{generate_client_password, ClientCredential, ClientRegistration};
