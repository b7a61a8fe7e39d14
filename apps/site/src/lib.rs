//! # SignEx Site Library
//!
//! The Yew application behind the SignEx road safety website.
//!
//! ## Module Organization
//! ```text
//! signex_site/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── app.rs          ◄─── Root component, context providers, router
//! ├── routes.rs       ◄─── Route table and page switch
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Build-time configuration
//! │   ├── toasts.rs   ◄─── App-wide toast queue (context)
//! │   └── ...         ◄─── One reducer per signex-core controller
//! ├── commands/
//! │   ├── download.rs ◄─── Certificate save through an <a download>
//! │   └── contact.rs  ◄─── Contact POST with reqwest
//! ├── components/     ◄─── Navbar, footer, toasts, carousel, FAQ
//! ├── pages/          ◄─── One component per route
//! └── error.rs        ◄─── UiError shown to visitors
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Site State                                           │
//! │                                                                         │
//! │  App-wide (Yew context)          Page-local (use_reducer)               │
//! │  ┌──────────────────┐            ┌──────────────────────────────────┐  │
//! │  │  ConfigState     │            │ CarouselState   AccordionState   │  │
//! │  │  ToastContext    │            │ ContactState    GalleryState     │  │
//! │  └──────────────────┘            │ NavState        TypewriterState  │  │
//! │                                  └──────────────────────────────────┘  │
//! │                                                                         │
//! │  Each reducer owns one signex-core controller and only mutates it      │
//! │  through the controller's methods.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod commands;
pub mod components;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_web::MakeWebConsoleWriter;

use app::{App, AppProps};
use state::ConfigState;

/// Runs the site.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Site Startup                                      │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • SIGNEX_* values captured at build time                            │
/// │     • Invalid values fall back to defaults (logged once tracing is up)  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,signex=debug; overridden with SIGNEX_LOG            │
/// │     • Written to the browser console                                    │
/// │                                                                         │
/// │  3. Render ───────────────────────────────────────────────────────────► │
/// │     • App receives ConfigState as props and provides it as context      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    let (config, config_error) = match ConfigState::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (ConfigState::default(), Some(err)),
    };

    init_tracing(&config.log_filter);

    if let Some(err) = config_error {
        warn!(%err, "Invalid build configuration, using defaults");
    }

    info!(
        mode = ?config.submission_mode(),
        "Starting SignEx site"
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

/// Initializes the tracing subscriber for the browser console.
///
/// ## Log Levels
/// - `SIGNEX_LOG=debug` - Show debug messages
/// - `SIGNEX_LOG=signex_site=trace` - Show trace for the site only
/// - Default: `info,signex=debug`
///
/// wasm has no system clock for the fmt layer and the console has no ANSI
/// support, so both are disabled.
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(state::config::DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
