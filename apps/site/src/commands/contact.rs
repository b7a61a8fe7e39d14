//! # Contact Commands
//!
//! Sends a contact submission to the configured endpoint.
//!
//! ## Request
//! ```text
//! POST {SIGNEX_CONTACT_ENDPOINT}
//! Content-Type: application/json
//!
//! { "id": "...", "submittedAt": "...", "name": "...", "email": "...",
//!   "phone": "...", "company": "...", "message": "...", "service": "..." }
//! ```
//!
//! ## Response Handling
//! - 2xx → success
//! - 400 / 422 → the endpoint rejected the input
//! - anything else, or no response → submission failed

use signex_core::ContactSubmission;
use tracing::{info, warn};

use crate::error::UiError;

/// POSTs `submission` as JSON and maps the outcome to a `UiError`.
pub async fn send_submission(endpoint: &str, submission: &ContactSubmission) -> Result<(), UiError> {
    info!(id = %submission.id, "Sending contact submission");

    let response = reqwest::Client::new()
        .post(endpoint)
        .json(submission)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        info!(id = %submission.id, status = status.as_u16(), "Contact submission accepted");
        return Ok(());
    }

    warn!(id = %submission.id, status = status.as_u16(), "Contact endpoint returned an error");
    Err(UiError::from_status(status.as_u16()))
}
