//! Contact form validation.
//!
//! Fields are keyed by a normalized form of their placeholder text, and the
//! same rules back both the inline per-field checks (run on blur) and the
//! whole-form check (run on submit). The email shape test is deliberately
//! loose: one `@`, something on each side, and a dot in the domain. Real
//! deliverability is the mail server's problem.

use thiserror::Error;

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Normalized keys of the fields that must be filled before submission.
pub const REQUIRED_FIELDS: &[&str] = &["first_name", "last_name", "email_address"];

/// Key of the field that must also pass the email shape check.
pub const EMAIL_FIELD: &str = "email_address";

/// Why a single field failed its inline check.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Per-field validation rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRules {
    pub required: bool,
    pub email: bool,
}

/// Derive a field key from its placeholder text: lowercased, with whitespace
/// runs collapsed to single underscores.
#[must_use]
pub fn normalize_field_key(placeholder: &str) -> String {
    placeholder
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Loose email shape check: non-empty local part, one `@`, and a domain with
/// a dot separating two non-empty runs. Whitespace anywhere fails.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Inline check for one field, run on blur. The email shape is only checked
/// once the field has content, so an untouched optional email field and a
/// merely-empty required one report differently.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEmail`] for a non-empty value that fails the
/// email shape check, then [`FieldError::Required`] for an empty required
/// field. The variant's `Display` is the inline message shown to the user.
pub fn check_field(value: &str, rules: FieldRules) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if rules.email && !trimmed.is_empty() && !is_valid_email(trimmed) {
        return Err(FieldError::InvalidEmail);
    }
    if rules.required && trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Whole-form check, run on submit. Succeeds when every required field is
/// non-empty after trimming and the email field passes the shape check.
#[must_use]
pub fn validate_submission<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> bool {
    let entries: Vec<(&str, &str)> = fields.into_iter().collect();
    let lookup = |key: &str| {
        entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| value.trim())
    };

    for field in REQUIRED_FIELDS {
        match lookup(field) {
            Some(value) if !value.is_empty() => {}
            _ => return false,
        }
    }
    lookup(EMAIL_FIELD).is_some_and(is_valid_email)
}
