//! # Contact Form Controller
//!
//! Field values plus the submission phase machine.
//!
//! ## Phase Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Contact Form Phases                                  │
//! │                                                                         │
//! │              submit(now)                tick(now ≥ resolve_at)          │
//! │   ┌──────┐  ──────────────►  ┌────────────┐  ──────────────►  ┌──────┐ │
//! │   │ Idle │                   │ Submitting │                   │Submit│ │
//! │   └──────┘  ◄──────────────  └────────────┘  resolve(Ok)      │ -ted │ │
//! │      ▲       (invalid input:       │                          └──┬───┘ │
//! │      │        no change)           │ resolve(Err)                │     │
//! │      │                             ▼                             │     │
//! │      │  set_field / submit   ┌────────────┐                      │     │
//! │      └───────────────────────│   Failed   │                      │     │
//! │      ▲                       └────────────┘                      │     │
//! │      │                                                           │     │
//! │      └──────── tick(now ≥ reset_at): fields reset ───────────────┘     │
//! │                                                                         │
//! │  Simulated mode: resolve_at = now + submit_delay (1.5 s)               │
//! │  Remote mode:    resolve_at = None; the site calls resolve()           │
//! │  reset_at = resolution time + confirmation_window (5 s)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller never reads the clock. The site schedules a timer for
//! [`ContactForm::next_deadline`] and calls [`ContactForm::tick`] when it
//! fires.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::ServiceChoice;
use crate::validation::validate_contact_form;
use crate::{CONFIRMATION_WINDOW_SECS, MAX_FIELD_LEN, MAX_MESSAGE_LEN, SUBMIT_DELAY_MS};

// =============================================================================
// Fields
// =============================================================================

/// A contact form field, named after its HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
    Service,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Message,
        ContactField::Service,
    ];

    /// The HTML `name` attribute.
    pub const fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Message => "message",
            ContactField::Service => "service",
        }
    }

    /// Whether the browser enforces `required` on this field.
    pub const fn is_required(&self) -> bool {
        !matches!(self, ContactField::Phone | ContactField::Company)
    }

    /// The input's `maxlength`, in characters. The service select has none.
    pub const fn max_len(&self) -> Option<usize> {
        match self {
            ContactField::Message => Some(MAX_MESSAGE_LEN),
            ContactField::Service => None,
            _ => Some(MAX_FIELD_LEN),
        }
    }
}

impl FromStr for ContactField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// The values typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub service: ServiceChoice,
}

impl ContactFormData {
    /// Writes `value` into `field`.
    ///
    /// Text fields are stored verbatim; the service field must be one of
    /// the fixed labels.
    pub fn set(&mut self, field: ContactField, value: &str) -> CoreResult<()> {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Phone => self.phone = value.to_string(),
            ContactField::Company => self.company = value.to_string(),
            ContactField::Message => self.message = value.to_string(),
            ContactField::Service => self.service = value.parse()?,
        }
        Ok(())
    }

    /// Current value of `field`, as the input element shows it.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
            ContactField::Service => self.service.label(),
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// What a backend receives when the form is submitted.
///
/// ```json
/// {
///   "id": "7d3c...",
///   "submittedAt": "2025-09-01T10:00:00Z",
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "phone": "",
///   "company": "",
///   "message": "Need a quote",
///   "service": "Road Sign Boards"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: ContactFormData,
}

/// How a submission gets resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionMode {
    /// Resolves itself successfully after `submit_delay`.
    #[default]
    Simulated,
    /// Waits for the site to report the backend's answer.
    Remote,
}

/// Fixed delays of the submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// Simulated round-trip time.
    pub submit_delay: Duration,
    /// How long the confirmation stays up before the form resets.
    pub confirmation_window: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        FormTimings {
            submit_delay: Duration::milliseconds(SUBMIT_DELAY_MS),
            confirmation_window: Duration::seconds(CONFIRMATION_WINDOW_SECS),
        }
    }
}

/// Where the form is in its submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting {
        started_at: DateTime<Utc>,
        /// Set in simulated mode only.
        resolve_at: Option<DateTime<Utc>>,
    },
    Submitted {
        reset_at: DateTime<Utc>,
    },
    /// Remote submission failed; fields are kept for a retry.
    Failed {
        message: String,
    },
}

// =============================================================================
// Controller
// =============================================================================

/// The contact form controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    data: ContactFormData,
    phase: FormPhase,
    timings: FormTimings,
    mode: SubmissionMode,
}

impl ContactForm {
    pub fn new(mode: SubmissionMode, timings: FormTimings) -> Self {
        ContactForm {
            data: ContactFormData::default(),
            phase: FormPhase::Idle,
            timings,
            mode,
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    #[inline]
    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    #[inline]
    pub fn timings(&self) -> FormTimings {
        self.timings
    }

    /// Drives the disabled submit button and busy spinner.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Drives the confirmation banner.
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    /// The failure message of the last remote submission, if it failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Writes one field. Editing after a failure clears the failure.
    pub fn set_field(&mut self, field: ContactField, value: &str) -> CoreResult<()> {
        self.data.set(field, value)?;
        if matches!(self.phase, FormPhase::Failed { .. }) {
            self.phase = FormPhase::Idle;
        }
        Ok(())
    }

    /// Starts a submission.
    ///
    /// ## Errors
    /// - `SubmissionInProgress` while Submitting or Submitted
    /// - `Validation` when a required field is blank or the email is malformed
    ///
    /// Neither error changes any state.
    pub fn submit(&mut self, now: DateTime<Utc>) -> CoreResult<ContactSubmission> {
        if matches!(
            self.phase,
            FormPhase::Submitting { .. } | FormPhase::Submitted { .. }
        ) {
            return Err(CoreError::SubmissionInProgress);
        }

        validate_contact_form(&self.data)?;

        let resolve_at = match self.mode {
            SubmissionMode::Simulated => Some(now + self.timings.submit_delay),
            SubmissionMode::Remote => None,
        };
        self.phase = FormPhase::Submitting {
            started_at: now,
            resolve_at,
        };

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            submitted_at: now,
            data: self.data.clone(),
        })
    }

    /// Reports the backend's answer for a remote submission.
    ///
    /// Returns `false` (and does nothing) unless a submission is pending.
    pub fn resolve(&mut self, now: DateTime<Utc>, outcome: Result<(), String>) -> bool {
        if !self.is_submitting() {
            return false;
        }

        self.phase = match outcome {
            Ok(()) => FormPhase::Submitted {
                reset_at: now + self.timings.confirmation_window,
            },
            Err(message) => FormPhase::Failed { message },
        };
        true
    }

    /// Applies every deadline that has passed by `now`, in order.
    ///
    /// Returns whether anything changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        loop {
            match self.phase {
                FormPhase::Submitting {
                    resolve_at: Some(at),
                    ..
                } if now >= at => {
                    self.phase = FormPhase::Submitted {
                        reset_at: at + self.timings.confirmation_window,
                    };
                }
                FormPhase::Submitted { reset_at } if now >= reset_at => {
                    self.reset();
                }
                _ => break,
            }
            changed = true;
        }
        changed
    }

    /// When the next timed transition is due.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        match self.phase {
            FormPhase::Submitting { resolve_at, .. } => resolve_at,
            FormPhase::Submitted { reset_at } => Some(reset_at),
            _ => None,
        }
    }

    /// Clears every field back to its default and returns to Idle.
    pub fn reset(&mut self) {
        self.data = ContactFormData::default();
        self.phase = FormPhase::Idle;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    fn filled(mode: SubmissionMode) -> ContactForm {
        let mut form = ContactForm::new(mode, FormTimings::default());
        form.set_field(ContactField::Name, "Jane Doe").unwrap();
        form.set_field(ContactField::Email, "jane@example.com").unwrap();
        form.set_field(ContactField::Message, "Need a quote").unwrap();
        form
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }
        assert!("fax".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_set_field_rejects_unknown_service() {
        let mut form = ContactForm::default();
        let err = form.set_field(ContactField::Service, "Paint").unwrap_err();
        assert_eq!(err, CoreError::UnknownService("Paint".to_string()));
        assert_eq!(form.data().service, ServiceChoice::RoadSignBoards);

        form.set_field(ContactField::Service, "Other").unwrap();
        assert_eq!(form.data().value(ContactField::Service), "Other");
    }

    #[test]
    fn test_submit_with_missing_field_changes_nothing() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled(SubmissionMode::Simulated);
            form.set_field(field, "").unwrap();
            let before = form.clone();

            let err = form.submit(t0()).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
            assert_eq!(form, before);
            assert!(!form.is_submitting());
            assert!(!form.is_submitted());
        }
    }

    #[test]
    fn test_submit_accepts_every_field_filled_to_its_maxlength() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            let Some(max) = field.max_len() else { continue };
            let value = match field {
                ContactField::Email => format!("{}@example.com", "a".repeat(max - 12)),
                _ => "a".repeat(max),
            };
            form.set_field(field, &value).unwrap();
        }

        assert!(form.submit(t0()).is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_simulated_submission_timeline() {
        let mut form = filled(SubmissionMode::Simulated);

        let submission = form.submit(t0()).unwrap();
        assert_eq!(submission.data.name, "Jane Doe");
        assert!(form.is_submitting());
        assert_eq!(
            form.next_deadline(),
            Some(t0() + Duration::milliseconds(1500))
        );

        assert!(!form.tick(t0() + Duration::milliseconds(1499)));
        assert!(form.is_submitting());

        assert!(form.tick(t0() + Duration::milliseconds(1500)));
        assert!(form.is_submitted());
        assert!(!form.is_submitting());
        assert_eq!(form.data().name, "Jane Doe");

        assert!(form.tick(t0() + Duration::milliseconds(6500)));
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(form.data(), &ContactFormData::default());
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn test_late_tick_applies_both_transitions() {
        let mut form = filled(SubmissionMode::Simulated);
        form.submit(t0()).unwrap();

        assert!(form.tick(t0() + Duration::seconds(30)));
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(form.data(), &ContactFormData::default());
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = filled(SubmissionMode::Simulated);
        form.submit(t0()).unwrap();
        assert_eq!(form.submit(t0()), Err(CoreError::SubmissionInProgress));

        form.tick(t0() + Duration::seconds(2));
        assert_eq!(form.submit(t0()), Err(CoreError::SubmissionInProgress));
    }

    #[test]
    fn test_remote_submission_waits_for_resolve() {
        let mut form = filled(SubmissionMode::Remote);
        form.submit(t0()).unwrap();
        assert_eq!(form.next_deadline(), None);
        assert!(!form.tick(t0() + Duration::seconds(60)));
        assert!(form.is_submitting());

        let later = t0() + Duration::seconds(2);
        assert!(form.resolve(later, Ok(())));
        assert_eq!(form.next_deadline(), Some(later + Duration::seconds(5)));
    }

    #[test]
    fn test_remote_failure_keeps_fields_and_allows_retry() {
        let mut form = filled(SubmissionMode::Remote);
        form.submit(t0()).unwrap();
        assert!(form.resolve(t0(), Err("Service unavailable".to_string())));

        assert_eq!(form.failure(), Some("Service unavailable"));
        assert_eq!(form.data().email, "jane@example.com");

        assert!(form.submit(t0() + Duration::seconds(1)).is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_editing_clears_failure() {
        let mut form = filled(SubmissionMode::Remote);
        form.submit(t0()).unwrap();
        form.resolve(t0(), Err("boom".to_string()));

        form.set_field(ContactField::Phone, "+91 80589 46520").unwrap();
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(form.failure(), None);
    }

    #[test]
    fn test_resolve_without_pending_submission_is_ignored() {
        let mut form = filled(SubmissionMode::Remote);
        assert!(!form.resolve(t0(), Ok(())));
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_submission_json_shape() {
        let mut form = filled(SubmissionMode::Simulated);
        let submission = form.submit(t0()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["service"], "Road Sign Boards");
        assert_eq!(json["submittedAt"], "2025-09-01T10:00:00Z");
        assert!(json["id"].is_string());
        assert!(json.get("data").is_none());
    }
}
