//! Credential wrappers
//!
//! The OpenHIM API password lives in a [`SecretString`]: zeroed on drop,
//! redacted in `Debug`, readable only through `expose_secret()`.
//!
//! ```rust
//! use mediators::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("openhim-password".to_string());
//! assert_eq!(password.expose_secret(), "openhim-password");
//! assert!(!format!("{password:?}").contains("openhim-password"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// Password text held inside a [`Secret`]
#[derive(Clone, Zeroize, Serialize, Deserialize)]
#[serde(transparent)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue([REDACTED])")
    }
}

impl Deref for SecretValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Zeroizing, redacted string
pub type SecretString = Secret<SecretValue>;

/// Wrap `value` as a [`SecretString`]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_exposed_value_reads_as_str() {
        let secret = secret_string("openhim-password".to_string());
        assert_eq!(secret.expose_secret(), "openhim-password");
        assert_eq!(secret.expose_secret().as_bytes(), b"openhim-password");
        assert_eq!(secret.expose_secret().len(), 16);
    }

    #[test]
    fn test_debug_never_shows_value() {
        let secret = secret_string("openhim-password".to_string());
        assert!(!format!("{secret:?}").contains("openhim-password"));
        assert!(!format!("{:?}", secret.expose_secret()).contains("openhim-password"));
    }

    #[test]
    fn test_empty_value() {
        let secret = secret_string(String::new());
        assert!(secret.expose_secret().is_empty());
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Section {
            password: SecretString,
        }

        let section: Section = toml::from_str("password = \"hunter2\"").unwrap();
        assert_eq!(section.password.expose_secret(), "hunter2");
    }
}
