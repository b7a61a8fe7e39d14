//! # Certificate Download
//!
//! Turns a certificate click into a save request and a notice for the
//! toast queue. Stateless: every call is independent, so repeated clicks
//! simply produce repeated notices.
//!
//! ```text
//! Certificate ──► certificate_url(prefix) ──► FileSaver::save(url, file_name)
//!                                                  │
//!                               Ok ◄───────────────┴──────────────► Err(e)
//!                               │                                    │
//!        "{title} certificate downloaded successfully!"   "Failed to download certificate: {e}"
//! ```

use crate::error::DownloadError;
use crate::gallery::image_url;
use crate::toast::Notice;
use crate::types::Certificate;

/// Something that can save a URL to the visitor's device.
pub trait FileSaver {
    fn save(&self, url: &str, file_name: &str) -> Result<(), DownloadError>;
}

/// Where a certificate file is served from.
pub fn certificate_url(prefix: &str, cert: &Certificate) -> String {
    image_url(prefix, cert.file_name)
}

/// Saves `cert` through `saver` and reports the outcome as a notice.
pub fn download_certificate(cert: &Certificate, prefix: &str, saver: &dyn FileSaver) -> Notice {
    let url = certificate_url(prefix, cert);
    match saver.save(&url, cert.file_name) {
        Ok(()) => Notice::success(format!(
            "{} certificate downloaded successfully!",
            cert.title
        )),
        Err(e) => Notice::error(format!("Failed to download certificate: {e}")),
    }
}
