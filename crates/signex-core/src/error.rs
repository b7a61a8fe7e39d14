//! # Error Types
//!
//! Domain-specific error types for signex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  signex-core errors (this file)                                        │
//! │  ├── CoreError        - Controller failures                            │
//! │  ├── ValidationError  - Contact form input failures                    │
//! │  └── DownloadError    - FileSaver failures (message only)              │
//! │                                                                         │
//! │  Site errors (in app)                                                  │
//! │  └── UiError          - What the page shows                            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → UiError → rendered message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, index, label)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Controller errors.
///
/// None of these are fatal. Each one is raised and handled on the page that
/// owns the controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An index outside the fixed entry list was requested.
    ///
    /// ## When This Occurs
    /// - `Carousel::go_to` with an index past the last team member
    /// - `Accordion::toggle` with an index past the last FAQ
    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// A form field name that the contact form does not have.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// A service label outside the fixed service list.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// Submit was pressed while a submission is still pending or displayed.
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The gallery source could not produce a listing.
    #[error("Gallery listing failed: {0}")]
    Gallery(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the browser's native constraint checks (`required`,
/// `type=email`) so the controller never trusts the page to have run them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Download Error
// =============================================================================

/// Failure reported by a [`FileSaver`](crate::download::FileSaver).
///
/// Only the message matters: it is shown verbatim in the failure toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DownloadError {
    pub message: String,
}

impl DownloadError {
    /// Creates a download error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        DownloadError {
            message: message.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(err.to_string(), "Index 7 is out of range for 2 entries");

        let err = CoreError::UnknownService("Paint".to_string());
        assert_eq!(err.to_string(), "Unknown service: Paint");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooLong {
            field: "message".to_string(),
            max: 5000,
        };
        assert_eq!(err.to_string(), "message must be at most 5000 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_download_error_displays_bare_message() {
        let err = DownloadError::new("Network unreachable");
        assert_eq!(err.to_string(), "Network unreachable");
    }
}
