//! OpenHIM token authentication
//!
//! The core API authenticates every request with four headers derived from a
//! per-user salt. The salt is obtained from `GET /authenticate/{username}`; the
//! token is then
//!
//! ```text
//! passhash = sha512_hex(salt + password)
//! token    = sha512_hex(passhash + salt + ts)
//! ```
//!
//! where `ts` is the timestamp sent in `auth-ts`. The server rejects tokens
//! whose timestamp drifts too far from its own clock, so headers are generated
//! immediately before use and never cached.

use crate::config::SecretString;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use serde::Deserialize;
use sha2::{Digest, Sha512};

/// Response of `GET /authenticate/{username}`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthChallenge {
    /// Per-user password salt
    pub salt: String,

    /// Server timestamp at the time of the challenge
    #[serde(default)]
    pub ts: Option<String>,
}

/// Authentication headers for a single OpenHIM request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub username: String,
    pub ts: String,
    pub salt: String,
    pub token: String,
}

impl AuthHeaders {
    /// Derive headers for `username` from a challenge salt, stamped now
    pub fn generate(username: &str, password: &SecretString, salt: &str) -> Self {
        Self::generate_at(username, password, salt, Utc::now())
    }

    /// Derive headers for an explicit timestamp
    pub fn generate_at(
        username: &str,
        password: &SecretString,
        salt: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let ts = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut hasher = Sha512::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.expose_secret().as_bytes());
        let passhash = format!("{:x}", hasher.finalize());

        let mut hasher = Sha512::new();
        hasher.update(passhash.as_bytes());
        hasher.update(salt.as_bytes());
        hasher.update(ts.as_bytes());
        let token = format!("{:x}", hasher.finalize());

        Self {
            username: username.to_string(),
            ts,
            salt: salt.to_string(),
            token,
        }
    }

    /// Attach the headers to a request
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("auth-username", self.username.as_str())
            .header("auth-ts", self.ts.as_str())
            .header("auth-salt", self.salt.as_str())
            .header("auth-token", self.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_headers_deterministic_for_same_inputs() {
        let password = secret_string("openhim-password".to_string());
        let a = AuthHeaders::generate_at("root@openhim.org", &password, "salt", fixed_time());
        let b = AuthHeaders::generate_at("root@openhim.org", &password, "salt", fixed_time());
        assert_eq!(a, b);
        assert_eq!(a.ts, "2024-03-01T12:00:00.000Z");
        assert_eq!(a.token.len(), 128);
        assert!(a.token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_token_matches_derivation() {
        let password = secret_string("pw".to_string());
        let headers = AuthHeaders::generate_at("user", &password, "abc", fixed_time());

        let passhash = format!("{:x}", Sha512::digest(b"abcpw"));
        let expected = format!(
            "{:x}",
            Sha512::digest(format!("{passhash}abc{}", headers.ts).as_bytes())
        );
        assert_eq!(headers.token, expected);
    }

    #[test]
    fn test_token_changes_with_salt_and_password() {
        let password = secret_string("pw".to_string());
        let other_password = secret_string("pw2".to_string());
        let base = AuthHeaders::generate_at("user", &password, "abc", fixed_time());

        let other_salt = AuthHeaders::generate_at("user", &password, "abd", fixed_time());
        let other_pw = AuthHeaders::generate_at("user", &other_password, "abc", fixed_time());

        assert_ne!(base.token, other_salt.token);
        assert_ne!(base.token, other_pw.token);
    }

    #[test]
    fn test_challenge_deserialize() {
        let challenge: AuthChallenge =
            serde_json::from_str(r#"{"salt":"xyz","ts":"2024-03-01T12:00:00.000Z"}"#).unwrap();
        assert_eq!(challenge.salt, "xyz");
        assert!(challenge.ts.is_some());
    }
}
