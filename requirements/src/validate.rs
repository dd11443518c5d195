//! Input normalization and validation for both form flows.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SearchError;

static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Trim and lower-case an email address.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `email` has a `local@domain.tld` shape.
///
/// Exactly one `@`, at least one `.` after it, no whitespace anywhere.
#[must_use]
pub fn is_valid_email_shape(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Normalize and validate the tracking email field.
///
/// # Errors
///
/// Returns [`SearchError::EmptyEmail`] for a blank field and
/// [`SearchError::InvalidEmail`] for a malformed address.
pub fn validate_search_email(raw: &str) -> Result<String, SearchError> {
    let email = normalize_email(raw);
    if email.is_empty() {
        return Err(SearchError::EmptyEmail);
    }
    if !is_valid_email_shape(&email) {
        return Err(SearchError::InvalidEmail);
    }
    Ok(email)
}
