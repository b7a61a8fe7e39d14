//! # Validation Module
//!
//! Input validation for the contact form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser (native constraints)                                 │
//! │  ├── `required` on name, email, message, service                       │
//! │  ├── `maxlength` from ContactField::max_len                            │
//! │  └── `type=email` format check                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ContactForm::submit (Rust)                                   │
//! │  └── THIS MODULE: the same rules, so a bypassed form cannot            │
//! │      enter the Submitting phase                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use signex_core::validation::{validate_email, validate_required};
//!
//! assert!(validate_required("name", "Jane Doe").is_ok());
//! assert!(validate_email("jane@example.com").is_ok());
//! assert!(validate_email("jane@").is_err());
//! ```

use crate::contact::{ContactField, ContactFormData};
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a field's length in characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates an email address the way `<input type="email">` does.
///
/// ## Rules
/// - Exactly one `@`
/// - Local part: non-empty, no whitespace
/// - Domain: dot-separated labels of letters, digits and hyphens; no label
///   is empty or starts/ends with a hyphen
///
/// A dotless domain (`user@localhost`) is accepted, matching browsers.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    validate_required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if domain.contains('@') {
        return Err(invalid("must contain exactly one '@'"));
    }

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return Err(invalid("missing or malformed local part"));
    }

    if domain.is_empty() {
        return Err(invalid("missing domain"));
    }

    let labels_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return Err(invalid("malformed domain"));
    }

    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the whole contact form, returning the first failure.
///
/// Checks run in on-screen order so the reported field is the first one
/// the visitor would see highlighted.
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult<()> {
    validate_required("name", &data.name)?;
    within_limit(data, ContactField::Name)?;

    validate_email(&data.email)?;
    within_limit(data, ContactField::Email)?;

    within_limit(data, ContactField::Phone)?;
    within_limit(data, ContactField::Company)?;

    // `service` is a closed enum; it can never be blank or unknown here.

    validate_required("message", &data.message)?;
    within_limit(data, ContactField::Message)?;

    Ok(())
}

/// Applies the same limit the input's `maxlength` carries.
fn within_limit(data: &ContactFormData, field: ContactField) -> ValidationResult<()> {
    match field.max_len() {
        Some(max) => validate_max_len(field.name(), data.value(field), max),
        None => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
