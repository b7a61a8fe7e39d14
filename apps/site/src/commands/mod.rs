//! # Commands Module
//!
//! Side effects the pages trigger. Everything that touches the browser or
//! the network lives here; the reducers in `state/` stay pure.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── download.rs ◄─── Certificate save through an <a download> click
//! └── contact.rs  ◄─── Contact submission POST
//! ```
//!
//! ## How Commands Report Back
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  onclick ──► commands::download::download(cert, prefix) ──► Notice      │
//! │                                                   │                     │
//! │                                      toasts.dispatch(Push(notice, now)) │
//! │                                                                         │
//! │  effect ──► spawn_local(send_submission(endpoint, &submission))         │
//! │                                                   │                     │
//! │                     contact.dispatch(Resolve { id, at, outcome })       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod contact;
pub mod download;
