//! # UI Error Type
//!
//! What the visitor sees when something goes wrong.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Site                               │
//! │                                                                         │
//! │  signex-core                Site                         Page           │
//! │  ───────────                ────                         ────           │
//! │                                                                         │
//! │  ValidationError ──► CoreError ──┐                                      │
//! │                                  ├──► UiError { code, message } ──►     │
//! │  reqwest ──────────► reqwest::Error         │           inline message  │
//! │                                             ▼                           │
//! │                                   tracing::error! (internals only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input problems keep their specific message. Anything internal is logged
//! and replaced with a generic sentence. Download failures never become a
//! `UiError`: `download_certificate` already turns them into a toast
//! `Notice`, and a failed gallery listing is rendered from `Gallery::error`.

use signex_core::CoreError;

/// Error rendered inline by the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Form input rejected (client-side or 400/422 from the endpoint)
    ValidationError,

    /// The contact endpoint failed or was unreachable
    SubmissionFailed,

    /// A bug: the page asked a controller for something it does not have
    Internal,
}

impl UiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal() -> Self {
        UiError::new(ErrorCode::Internal, "Something went wrong. Please reload the page.")
    }

    /// Maps a non-success HTTP status from the contact endpoint.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => UiError::validation(
                "The server rejected the form. Please check your details and try again.",
            ),
            _ => UiError::new(
                ErrorCode::SubmissionFailed,
                "We couldn't send your message. Please try again later.",
            ),
        }
    }
}

impl From<CoreError> for UiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => UiError::validation(capitalize(&e.to_string())),
            CoreError::UnknownService(label) => {
                UiError::validation(format!("Please choose a service from the list ({label} is not offered)"))
            }
            CoreError::SubmissionInProgress => {
                UiError::validation("Your message is already being sent.")
            }
            CoreError::Gallery(reason) => {
                tracing::error!(%reason, "Gallery error reached the contact page");
                UiError::internal()
            }
            CoreError::IndexOutOfRange { index, len } => {
                tracing::error!(index, len, "Controller index out of range");
                UiError::internal()
            }
            CoreError::UnknownField(name) => {
                tracing::error!(%name, "Unknown contact form field");
                UiError::internal()
            }
        }
    }
}

impl From<reqwest::Error> for UiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Contact request failed: {}", err);
        match err.status() {
            Some(status) => UiError::from_status(status.as_u16()),
            None => UiError::new(
                ErrorCode::SubmissionFailed,
                "We couldn't reach the server. Please check your connection and try again.",
            ),
        }
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for UiError {}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signex_core::ValidationError;

    #[test]
    fn test_validation_keeps_field_message() {
        let err: UiError = CoreError::from(ValidationError::Required {
            field: "email".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Email is required");
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err: UiError = CoreError::IndexOutOfRange { index: 9, len: 2 }.into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains('9'));
    }

    #[test]
    fn test_non_form_errors_are_generic() {
        for err in [
            CoreError::Gallery("listing timed out".to_string()),
            CoreError::UnknownField("fax".to_string()),
        ] {
            let ui: UiError = err.into();
            assert_eq!(ui, UiError::internal());
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(UiError::from_status(400).code, ErrorCode::ValidationError);
        assert_eq!(UiError::from_status(422).code, ErrorCode::ValidationError);
        assert_eq!(UiError::from_status(500).code, ErrorCode::SubmissionFailed);
        assert_eq!(UiError::from_status(404).code, ErrorCode::SubmissionFailed);
    }
}
