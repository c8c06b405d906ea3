//! Cross-border identifier generation

use crate::domain::{CrossBorderId, MediatorError, Result};
use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Issue a new cross-border ID for `jurisdiction`, stamped with the current UTC month
///
/// The identifier is not checked against existing patients; callers that need
/// uniqueness must verify it themselves.
///
/// # Errors
///
/// Returns a validation error if the first two characters of `jurisdiction`
/// are not ASCII letters.
///
/// # Example
///
/// ```
/// use mediators::core::identifiers::make_cross_border_id;
///
/// let id = make_cross_border_id("kenya").unwrap();
/// assert_eq!(id.jurisdiction(), "KE");
/// ```
pub fn make_cross_border_id(jurisdiction: &str) -> Result<CrossBorderId> {
    make_cross_border_id_at(jurisdiction, Utc::now())
}

/// Issue a cross-border ID stamped with `now`
pub fn make_cross_border_id_at(jurisdiction: &str, now: DateTime<Utc>) -> Result<CrossBorderId> {
    let prefix: String = jurisdiction.chars().take(2).collect::<String>().to_uppercase();

    if prefix.len() != 2 || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(MediatorError::Validation(format!(
            "Jurisdiction '{jurisdiction}' must start with two ASCII letters"
        )));
    }

    let suffix = Uuid::new_v4().simple().to_string()[..5].to_uppercase();

    CrossBorderId::new(format!(
        "{prefix}-{:04}-{:02}-{suffix}",
        now.year(),
        now.month()
    ))
    .map_err(MediatorError::Validation)
}
