//! Client credential generation
//!
//! OpenHIM API clients authenticate with a salted SHA-512 password hash. The
//! salt is 16 bytes from the operating system's CSPRNG, hex encoded, and the
//! hash is `sha512_hex(password + salt_hex)`.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha512};

/// Hash algorithm name as the switch expects it
pub const PASSWORD_ALGORITHM: &str = "sha512";

const SALT_LEN: usize = 16;

/// Salted hash of a client password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredential {
    pub password_hash: String,
    pub password_salt: String,
    pub password_algorithm: String,
}

/// `POST /clients` payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistration {
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub name: String,
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub credential: ClientCredential,
}

impl ClientRegistration {
    /// Registration for a client named `name`
    ///
    /// The client ID is the name, and the client is granted every role (`*`).
    pub fn new(name: &str, credential: ClientCredential) -> Self {
        Self {
            client_id: name.to_string(),
            name: name.to_string(),
            roles: vec!["*".to_string()],
            credential,
        }
    }
}

/// Hash `password` with a fresh random salt
///
/// # Example
///
/// ```
/// use mediators::adapters::openhim::credentials::generate_client_password;
///
/// let credential = generate_client_password("secret");
/// assert_eq!(credential.password_salt.len(), 32);
/// assert_eq!(credential.password_hash.len(), 128);
/// ```
pub fn generate_client_password(password: &str) -> ClientCredential {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    hash_with_salt(password, &hex::encode(salt))
}

/// Hash `password` with a known hex salt
pub fn hash_with_salt(password: &str, salt_hex: &str) -> ClientCredential {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hasher.update(salt_hex.as_bytes());

    ClientCredential {
        password_hash: format!("{:x}", hasher.finalize()),
        password_salt: salt_hex.to_string(),
        password_algorithm: PASSWORD_ALGORITHM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_is_random() {
        let a = generate_client_password("secret");
        let b = generate_client_password("secret");
        assert_ne!(a.password_salt, b.password_salt);
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_hash_with_salt_known_value() {
        let credential = hash_with_salt("secret", "00ff");
        let expected = format!("{:x}", Sha512::digest(b"secret00ff"));
        assert_eq!(credential.password_hash, expected);
        assert_eq!(credential.password_algorithm, "sha512");
    }

    #[test]
    fn test_generated_hash_verifies_against_its_salt() {
        let credential = generate_client_password("secret");
        let recomputed = hash_with_salt("secret", &credential.password_salt);
        assert_eq!(credential, recomputed);
    }

    #[test]
    fn test_salt_is_lowercase_hex_of_sixteen_bytes() {
        let credential = generate_client_password("secret");
        let salt = hex::decode(&credential.password_salt).unwrap();
        assert_eq!(salt.len(), 16);
        assert_eq!(credential.password_salt, credential.password_salt.to_lowercase());
    }

    #[test]
    fn test_registration_payload_shape() {
        let registration = ClientRegistration::new("alice", hash_with_salt("secret", "ab"));
        let value = serde_json::to_value(&registration).unwrap();

        assert_eq!(value["clientID"], "alice");
        assert_eq!(value["name"], "alice");
        assert_eq!(value["roles"], serde_json::json!(["*"]));
        assert_eq!(value["passwordAlgorithm"], "sha512");
        assert_eq!(value["passwordSalt"], "ab");
        assert!(value["passwordHash"].is_string());
    }
}
