//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cross-border patient identifier
///
/// A human-readable identifier used to match a patient across jurisdictions.
/// Format: `{JJ}-{YYYY}-{MM}-{XXXXX}` where `JJ` is a two-letter jurisdiction
/// code, `YYYY`/`MM` the issue year and month, and `XXXXX` five uppercase
/// alphanumeric characters.
///
/// # Examples
///
/// ```
/// use mediators::domain::ids::CrossBorderId;
/// use std::str::FromStr;
///
/// let id = CrossBorderId::from_str("KE-2024-03-9F1A2").unwrap();
/// assert_eq!(id.jurisdiction(), "KE");
/// assert_eq!(id.month(), "03");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrossBorderId(String);

impl CrossBorderId {
    /// Creates a new CrossBorderId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(CrossBorderId)` if the string follows the
    /// `{JJ}-{YYYY}-{MM}-{XXXXX}` layout, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 4 {
            return Err(format!(
                "Invalid cross-border ID format. Expected format: {{JJ}}-{{YYYY}}-{{MM}}-{{XXXXX}}, got: {id}"
            ));
        }

        let (jurisdiction, year, month, suffix) = (parts[0], parts[1], parts[2], parts[3]);

        if jurisdiction.len() != 2 || !jurisdiction.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!(
                "Invalid jurisdiction '{jurisdiction}' in cross-border ID: expected two uppercase letters"
            ));
        }

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "Invalid year '{year}' in cross-border ID: expected four digits"
            ));
        }

        let month_valid = month.len() == 2
            && month
                .parse::<u32>()
                .map(|m| (1..=12).contains(&m))
                .unwrap_or(false);
        if !month_valid {
            return Err(format!(
                "Invalid month '{month}' in cross-border ID: expected 01-12"
            ));
        }

        if suffix.len() != 5
            || !suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(format!(
                "Invalid suffix '{suffix}' in cross-border ID: expected five uppercase alphanumerics"
            ));
        }

        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Two-letter jurisdiction code
    pub fn jurisdiction(&self) -> &str {
        &self.0[0..2]
    }

    /// Four-digit issue year
    pub fn year(&self) -> &str {
        &self.0[3..7]
    }

    /// Zero-padded issue month
    pub fn month(&self) -> &str {
        &self.0[8..10]
    }

    /// Random suffix
    pub fn suffix(&self) -> &str {
        &self.0[11..]
    }
}

impl fmt::Display for CrossBorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CrossBorderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CrossBorderId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CrossBorderId> for String {
    fn from(id: CrossBorderId) -> Self {
        id.0
    }
}

impl AsRef<str> for CrossBorderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
