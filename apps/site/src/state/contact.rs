//! # Contact State
//!
//! Reducer around the contact form controller.
//!
//! ## Remote Submissions
//! ```text
//! Submit(now) ──► form.submit() ──► pending = Some(submission)
//!                                        │
//!                    ContactPage effect sees a new pending id,
//!                    POSTs it, then dispatches Resolve { id, .. }
//!                                        │
//! Resolve { id } ──► ignored unless id == pending.id ──► form.resolve()
//! ```
//! In simulated mode `pending` stays `None` and the page only schedules
//! `Tick` at `form.next_deadline()`.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use signex_core::contact::{ContactField, ContactForm, FormTimings, SubmissionMode};
use signex_core::{ContactSubmission, CoreError};
use tracing::{debug, info, warn};
use uuid::Uuid;
use yew::Reducible;

use crate::error::UiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    /// Submission awaiting the endpoint's answer (remote mode only).
    pub pending: Option<ContactSubmission>,
    /// Message shown above the submit button.
    pub error: Option<UiError>,
}

impl ContactState {
    pub fn new(mode: SubmissionMode, timings: FormTimings) -> Self {
        ContactState {
            form: ContactForm::new(mode, timings),
            pending: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    SetField(ContactField, String),
    Submit(DateTime<Utc>),
    Tick(DateTime<Utc>),
    Resolve {
        id: Uuid,
        at: DateTime<Utc>,
        outcome: Result<(), String>,
    },
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetField(field, value) => {
                if let Err(err) = next.form.set_field(field, &value) {
                    next.error = Some(err.into());
                } else {
                    next.error = None;
                }
            }
            ContactAction::Submit(now) => match next.form.submit(now) {
                Ok(submission) => {
                    info!(id = %submission.id, service = %submission.data.service, "Contact form submitted");
                    next.error = None;
                    if next.form.mode() == SubmissionMode::Remote {
                        next.pending = Some(submission);
                    }
                }
                Err(CoreError::SubmissionInProgress) => return self,
                Err(err) => {
                    debug!(%err, "Contact form rejected");
                    next.error = Some(err.into());
                }
            },
            ContactAction::Tick(now) => {
                if !next.form.tick(now) {
                    return self;
                }
                if !next.form.is_submitting() && !next.form.is_submitted() {
                    debug!("Contact form reset");
                }
            }
            ContactAction::Resolve { id, at, outcome } => {
                if next.pending.as_ref().map(|p| p.id) != Some(id) {
                    warn!(%id, "Ignoring stale contact response");
                    return self;
                }
                next.pending = None;
                if let Err(message) = &outcome {
                    warn!(%id, %message, "Contact submission failed");
                }
                next.form.resolve(at, outcome);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use signex_core::FormPhase;

    use crate::error::ErrorCode;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    fn filled(mode: SubmissionMode) -> Rc<ContactState> {
        let s = Rc::new(ContactState::new(mode, FormTimings::default()));
        s.reduce(ContactAction::SetField(ContactField::Name, "Jane Doe".into()))
            .reduce(ContactAction::SetField(ContactField::Email, "jane@example.com".into()))
            .reduce(ContactAction::SetField(ContactField::Message, "Need a quote".into()))
    }

    #[test]
    fn test_simulated_flow() {
        let s = filled(SubmissionMode::Simulated).reduce(ContactAction::Submit(t0()));
        assert!(s.form.is_submitting());
        assert!(s.pending.is_none());

        let s = s.reduce(ContactAction::Tick(t0() + Duration::milliseconds(1500)));
        assert!(s.form.is_submitted());

        let s = s.reduce(ContactAction::Tick(t0() + Duration::milliseconds(6500)));
        assert_eq!(s.form.phase(), &FormPhase::Idle);
        assert!(s.form.data().name.is_empty());
    }

    #[test]
    fn test_invalid_submit_shows_error_only() {
        let s = Rc::new(ContactState::new(SubmissionMode::Simulated, FormTimings::default()))
            .reduce(ContactAction::Submit(t0()));

        assert_eq!(s.form.phase(), &FormPhase::Idle);
        assert_eq!(s.error.as_ref().map(|e| e.code), Some(ErrorCode::ValidationError));

        let s = s.reduce(ContactAction::SetField(ContactField::Name, "J".into()));
        assert!(s.error.is_none());
    }

    #[test]
    fn test_idle_tick_keeps_same_state() {
        let s = filled(SubmissionMode::Simulated);
        let after = s.clone().reduce(ContactAction::Tick(t0()));
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn test_remote_flow_resolves_matching_id_only() {
        let s = filled(SubmissionMode::Remote).reduce(ContactAction::Submit(t0()));
        let id = s.pending.as_ref().map(|p| p.id).unwrap();

        let stale = s.clone().reduce(ContactAction::Resolve {
            id: Uuid::new_v4(),
            at: t0(),
            outcome: Ok(()),
        });
        assert!(Rc::ptr_eq(&s, &stale));

        let s = s.reduce(ContactAction::Resolve {
            id,
            at: t0(),
            outcome: Err("We couldn't send your message.".into()),
        });
        assert!(s.pending.is_none());
        assert_eq!(s.form.failure(), Some("We couldn't send your message."));
        assert_eq!(s.form.data().name, "Jane Doe");
    }
}
