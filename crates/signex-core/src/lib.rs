//! # signex-core: Pure UI-State Logic for the SignEx Site
//!
//! This crate holds every piece of interactive behavior on the SignEx
//! website as plain Rust state machines with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SignEx Site Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (wasm32)                             │   │
//! │  │    DOM events ──► timers ──► fetch ──► <a download>            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/site (Yew)                              │   │
//! │  │    pages, components, reducers, side effects, logging          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain method calls, explicit `now`     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ signex-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ carousel │ │accordion │ │ contact  │ │ gallery  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ download │ │  toast   │ │   nav    │ │typewriter│          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO DOM • NO TIMERS • NO NETWORK • NO CLOCK                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`carousel`] - Team carousel index and slide direction
//! - [`accordion`] - Single-open FAQ accordion
//! - [`contact`] - Contact form fields and submission phases
//! - [`gallery`] - Gallery listing with loading / error state
//! - [`download`] - Certificate download trigger
//! - [`toast`] - Transient notification queue
//! - [`nav`] - Page table and navbar state
//! - [`typewriter`] - Cycling headline
//! - [`content`] - Fixed site copy
//! - [`types`] - Content record types
//! - [`validation`] - Contact form input rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Explicit Time**: timed transitions take `now` and expose their next deadline
//! 2. **No I/O**: the DOM, timers and the network belong to the site
//! 3. **Typed Errors**: every failure is a `CoreError` variant, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use signex_core::contact::{ContactField, ContactForm};
//!
//! let t0 = Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap();
//! let mut form = ContactForm::default();
//! form.set_field(ContactField::Name, "Jane Doe").unwrap();
//! form.set_field(ContactField::Email, "jane@example.com").unwrap();
//! form.set_field(ContactField::Message, "Need a quote").unwrap();
//!
//! form.submit(t0).unwrap();
//! assert!(form.is_submitting());
//!
//! form.tick(t0 + Duration::milliseconds(1500));
//! assert!(form.is_submitted());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod download;
pub mod error;
pub mod gallery;
pub mod nav;
pub mod toast;
pub mod types;
pub mod typewriter;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accordion::Accordion;
pub use carousel::{Carousel, Direction};
pub use contact::{ContactField, ContactForm, ContactFormData, ContactSubmission, FormPhase};
pub use error::{CoreError, CoreResult, DownloadError, ValidationError};
pub use gallery::{Gallery, GallerySource, StaticGallery};
pub use nav::{NavMenu, Page};
pub use toast::{Notice, Toast, ToastId, ToastKind, ToastQueue};
pub use types::*;
pub use typewriter::Typewriter;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Team carousel auto-advance period.
pub const CAROUSEL_INTERVAL_SECS: i64 = 20;

/// Simulated contact submission round trip.
pub const SUBMIT_DELAY_MS: i64 = 1500;

/// How long the "thank you" banner stays before the form resets.
pub const CONFIRMATION_WINDOW_SECS: i64 = 5;

/// Toast lifetime.
pub const TOAST_LIFETIME_SECS: i64 = 3;

/// Longest accepted single-line contact field (name, email, phone, company).
pub const MAX_FIELD_LEN: usize = 200;

/// Longest accepted contact message, in characters.
///
/// ## Why a limit?
/// Without a cap a pasted document would be forwarded whole to the contact
/// endpoint. The site renders both limits as `maxlength` so the browser
/// stops input at the limit, and `submit` only rejects a bypassed form.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// URL prefix of gallery images.
pub const GALLERY_PREFIX: &str = "/gallery";

/// URL prefix of certificate PDFs.
pub const CERTIFICATE_PREFIX: &str = "/certifications";

/// Vertical scroll offset (px) past which the navbar gains its shadow.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Typewriter step period.
pub const TYPEWRITER_TICK_MS: u32 = 60;

/// Ticks a fully typed phrase stays on screen (about one second).
pub const TYPEWRITER_HOLD_TICKS: u32 = 17;
