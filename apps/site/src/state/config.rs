//! # Configuration State
//!
//! Site configuration captured at build time.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `SIGNEX_*` environment variables present when Trunk builds the site
//! 2. Defaults (this file)
//!
//! Browsers have no process environment, so values are baked in with
//! `option_env!`. Configuration is read-only after startup and handed to
//! components through a `ContextProvider`.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use signex_core::contact::{FormTimings, SubmissionMode};
use signex_core::{
    CAROUSEL_INTERVAL_SECS, CERTIFICATE_PREFIX, CONFIRMATION_WINDOW_SECS, GALLERY_PREFIX,
    SUBMIT_DELAY_MS, TOAST_LIFETIME_SECS,
};
use thiserror::Error;

/// Tracing directive used when `SIGNEX_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,signex=debug";

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Where contact submissions are POSTed.
    /// `None` keeps the simulated submission.
    pub contact_endpoint: Option<String>,

    /// Tracing filter directive.
    pub log_filter: String,

    /// Team carousel auto-advance period.
    pub carousel_interval_secs: i64,

    /// Simulated submission round trip.
    pub submit_delay_ms: i64,

    /// How long the confirmation stays before the form resets.
    pub confirmation_secs: i64,

    /// Toast lifetime.
    pub toast_secs: i64,

    /// URL prefix of gallery images.
    pub gallery_prefix: String,

    /// URL prefix of certificate PDFs.
    pub certificate_prefix: String,
}

impl Default for ConfigState {
    /// Returns the production defaults.
    ///
    /// ## Default Values
    /// - Submission: simulated (no endpoint)
    /// - Carousel: 20 s
    /// - Submit delay: 1.5 s, confirmation: 5 s
    /// - Toasts: 3 s
    fn default() -> Self {
        ConfigState {
            contact_endpoint: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            carousel_interval_secs: CAROUSEL_INTERVAL_SECS,
            submit_delay_ms: SUBMIT_DELAY_MS,
            confirmation_secs: CONFIRMATION_WINDOW_SECS,
            toast_secs: TOAST_LIFETIME_SECS,
            gallery_prefix: GALLERY_PREFIX.to_string(),
            certificate_prefix: CERTIFICATE_PREFIX.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from the build environment and defaults.
    ///
    /// ## Environment Variables
    /// - `SIGNEX_CONTACT_ENDPOINT`: enables remote submission
    /// - `SIGNEX_LOG`: tracing filter directive
    /// - `SIGNEX_CAROUSEL_INTERVAL_SECS`, `SIGNEX_SUBMIT_DELAY_MS`,
    ///   `SIGNEX_CONFIRMATION_SECS`, `SIGNEX_TOAST_SECS`: timing overrides
    /// - `SIGNEX_GALLERY_PREFIX`, `SIGNEX_CERTIFICATE_PREFIX`: asset prefixes
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match name {
            "SIGNEX_CONTACT_ENDPOINT" => option_env!("SIGNEX_CONTACT_ENDPOINT"),
            "SIGNEX_LOG" => option_env!("SIGNEX_LOG"),
            "SIGNEX_CAROUSEL_INTERVAL_SECS" => option_env!("SIGNEX_CAROUSEL_INTERVAL_SECS"),
            "SIGNEX_SUBMIT_DELAY_MS" => option_env!("SIGNEX_SUBMIT_DELAY_MS"),
            "SIGNEX_CONFIRMATION_SECS" => option_env!("SIGNEX_CONFIRMATION_SECS"),
            "SIGNEX_TOAST_SECS" => option_env!("SIGNEX_TOAST_SECS"),
            "SIGNEX_GALLERY_PREFIX" => option_env!("SIGNEX_GALLERY_PREFIX"),
            "SIGNEX_CERTIFICATE_PREFIX" => option_env!("SIGNEX_CERTIFICATE_PREFIX"),
            _ => None,
        })
    }

    /// Builds a ConfigState from any name → value lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(str::trim).filter(|v| !v.is_empty());
        let mut config = ConfigState::default();

        if let Some(endpoint) = get("SIGNEX_CONTACT_ENDPOINT") {
            config.contact_endpoint = Some(endpoint.to_string());
        }

        if let Some(filter) = get("SIGNEX_LOG") {
            config.log_filter = filter.to_string();
        }

        if let Some(raw) = get("SIGNEX_CAROUSEL_INTERVAL_SECS") {
            config.carousel_interval_secs = parse_period("SIGNEX_CAROUSEL_INTERVAL_SECS", raw, MILLIS_PER_SEC)?;
        }

        if let Some(raw) = get("SIGNEX_SUBMIT_DELAY_MS") {
            config.submit_delay_ms = parse_period("SIGNEX_SUBMIT_DELAY_MS", raw, 1)?;
        }

        if let Some(raw) = get("SIGNEX_CONFIRMATION_SECS") {
            config.confirmation_secs = parse_period("SIGNEX_CONFIRMATION_SECS", raw, MILLIS_PER_SEC)?;
        }

        if let Some(raw) = get("SIGNEX_TOAST_SECS") {
            config.toast_secs = parse_period("SIGNEX_TOAST_SECS", raw, MILLIS_PER_SEC)?;
        }

        if let Some(prefix) = get("SIGNEX_GALLERY_PREFIX") {
            config.gallery_prefix = prefix.to_string();
        }

        if let Some(prefix) = get("SIGNEX_CERTIFICATE_PREFIX") {
            config.certificate_prefix = prefix.to_string();
        }

        Ok(config)
    }

    pub fn submission_mode(&self) -> SubmissionMode {
        match self.contact_endpoint {
            Some(_) => SubmissionMode::Remote,
            None => SubmissionMode::Simulated,
        }
    }

    pub fn form_timings(&self) -> FormTimings {
        FormTimings {
            submit_delay: Duration::milliseconds(self.submit_delay_ms),
            confirmation_window: Duration::seconds(self.confirmation_secs),
        }
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::seconds(self.carousel_interval_secs)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::seconds(self.toast_secs)
    }
}

const MILLIS_PER_SEC: i64 = 1000;

/// Longest period a browser timer can hold; gloo-timers takes `u32` millis.
const MAX_PERIOD_MS: i64 = u32::MAX as i64;

/// Parses a timer period expressed in units of `unit_ms` milliseconds.
///
/// Zero or negative periods would make a timer spin, and anything past
/// `MAX_PERIOD_MS` cannot be scheduled.
fn parse_period(name: &str, raw: &str, unit_ms: i64) -> Result<i64, ConfigError> {
    let in_range = |value: i64| {
        value > 0
            && value
                .checked_mul(unit_ms)
                .map_or(false, |ms| ms <= MAX_PERIOD_MS)
    };
    match raw.parse::<i64>() {
        Ok(value) if in_range(value) => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<&'static str> {
        let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |name| map.get(name).copied()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.submission_mode(), SubmissionMode::Simulated);
        assert_eq!(config.form_timings(), FormTimings::default());
        assert_eq!(config.carousel_interval(), Duration::seconds(20));
        assert_eq!(config.toast_lifetime(), Duration::seconds(3));
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SIGNEX_CONTACT_ENDPOINT", "https://api.signexsafety.com/contact"),
            ("SIGNEX_LOG", "debug"),
            ("SIGNEX_SUBMIT_DELAY_MS", "250"),
            ("SIGNEX_TOAST_SECS", " 8 "),
            ("SIGNEX_GALLERY_PREFIX", "https://cdn.example.com/gallery"),
        ]))
        .unwrap();

        assert_eq!(config.submission_mode(), SubmissionMode::Remote);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.form_timings().submit_delay, Duration::milliseconds(250));
        assert_eq!(config.toast_lifetime(), Duration::seconds(8));
        assert_eq!(config.gallery_prefix, "https://cdn.example.com/gallery");
        assert_eq!(config.certificate_prefix, "/certifications");
    }

    #[test]
    fn test_blank_endpoint_is_unset() {
        let config = ConfigState::from_lookup(lookup(&[("SIGNEX_CONTACT_ENDPOINT", "  ")])).unwrap();
        assert_eq!(config.contact_endpoint, None);
    }

    #[test]
    fn test_invalid_timing_is_rejected() {
        for raw in ["soon", "0", "-5"] {
            let err = ConfigState::from_lookup(lookup(&[("SIGNEX_CAROUSEL_INTERVAL_SECS", raw)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    name: "SIGNEX_CAROUSEL_INTERVAL_SECS".to_string(),
                    value: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_period_beyond_timer_range_is_rejected() {
        let oversized = [
            ("SIGNEX_CAROUSEL_INTERVAL_SECS", "9223372036854775807"),
            ("SIGNEX_CAROUSEL_INTERVAL_SECS", "4294968"),
            ("SIGNEX_SUBMIT_DELAY_MS", "9223372036854775807"),
            ("SIGNEX_SUBMIT_DELAY_MS", "4294967296"),
            ("SIGNEX_CONFIRMATION_SECS", "9223372036854775807"),
            ("SIGNEX_TOAST_SECS", "9223372036854775807"),
        ];
        for (name, raw) in oversized {
            let err = ConfigState::from_lookup(lookup(&[(name, raw)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    name: name.to_string(),
                    value: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_longest_timer_period_is_usable() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SIGNEX_CAROUSEL_INTERVAL_SECS", "4294967"),
            ("SIGNEX_SUBMIT_DELAY_MS", "4294967295"),
        ]))
        .unwrap();

        assert_eq!(config.carousel_interval(), Duration::seconds(4_294_967));
        assert_eq!(
            config.form_timings().submit_delay,
            Duration::milliseconds(i64::from(u32::MAX))
        );

        let mut form = signex_core::ContactForm::new(SubmissionMode::Simulated, config.form_timings());
        form.set_field(signex_core::ContactField::Name, "Jane Doe").unwrap();
        form.set_field(signex_core::ContactField::Email, "jane@example.com").unwrap();
        form.set_field(signex_core::ContactField::Message, "Need a quote").unwrap();
        assert!(form.submit(chrono::Utc::now()).is_ok());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["carouselIntervalSecs"], 20);
        assert!(json["contactEndpoint"].is_null());
    }
}
