//! End-to-end contact page scenario, driven with explicit timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use signex_core::contact::{ContactField, ContactForm, ContactFormData, FormPhase};
use signex_core::content::CERTIFICATES;
use signex_core::download::{download_certificate, FileSaver};
use signex_core::nav::Page;
use signex_core::{
    CoreError, DownloadError, ServiceChoice, ToastKind, ToastQueue, CERTIFICATE_PREFIX,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
}

#[test]
fn contact_page_submit_confirm_and_reset() {
    assert_eq!(Page::from_path("/contact"), Page::Contact);

    let mut form = ContactForm::default();
    form.set_field(ContactField::Name, "Jane Doe").unwrap();
    form.set_field(ContactField::Email, "jane@example.com").unwrap();
    form.set_field(ContactField::Message, "Need a quote").unwrap();
    assert_eq!(form.data().service, ServiceChoice::RoadSignBoards);

    let submission = form.submit(t0()).unwrap();
    assert!(form.is_submitting());
    assert!(!form.is_submitted());
    assert_eq!(submission.data.message, "Need a quote");

    // A second click while the request is pending is refused.
    assert_eq!(form.submit(t0()), Err(CoreError::SubmissionInProgress));

    let deadline = form.next_deadline().unwrap();
    assert_eq!(deadline, t0() + Duration::milliseconds(1500));
    form.tick(deadline);
    assert!(!form.is_submitting());
    assert!(form.is_submitted());

    let reset_at = form.next_deadline().unwrap();
    assert_eq!(reset_at, t0() + Duration::milliseconds(6500));
    form.tick(reset_at);
    assert_eq!(form.phase(), &FormPhase::Idle);
    assert_eq!(form.data(), &ContactFormData::default());
}

#[test]
fn blank_required_field_blocks_submission() {
    let mut form = ContactForm::default();
    form.set_field(ContactField::Name, "Jane Doe").unwrap();
    form.set_field(ContactField::Message, "Need a quote").unwrap();

    assert!(matches!(form.submit(t0()), Err(CoreError::Validation(_))));
    assert!(!form.is_submitting());
    assert!(!form.is_submitted());
    assert_eq!(form.next_deadline(), None);
}

struct Offline;

impl FileSaver for Offline {
    fn save(&self, _url: &str, _file_name: &str) -> Result<(), DownloadError> {
        Err(DownloadError::new("offline"))
    }
}

#[test]
fn failed_downloads_stack_as_toasts_then_expire() {
    let mut toasts = ToastQueue::default();
    for cert in CERTIFICATES {
        let notice = download_certificate(cert, CERTIFICATE_PREFIX, &Offline);
        toasts.push_notice(notice, t0());
    }

    assert_eq!(toasts.len(), CERTIFICATES.len());
    assert!(toasts.iter().all(|t| t.kind == ToastKind::Error
        && t.message == "Failed to download certificate: offline"));

    assert_eq!(toasts.prune(t0() + Duration::seconds(3)), CERTIFICATES.len());
    assert!(toasts.is_empty());
}
