//! # Download Commands
//!
//! Saves certificate PDFs by clicking a temporary `<a download>` element.

use signex_core::download::{download_certificate, FileSaver};
use signex_core::{Certificate, DownloadError, Notice, ToastKind};
use tracing::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Saves files through the browser's download manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFileSaver;

impl FileSaver for BrowserFileSaver {
    fn save(&self, url: &str, file_name: &str) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DownloadError::new("No document available"))?;
        let body = document
            .body()
            .ok_or_else(|| DownloadError::new("Document has no body"))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| DownloadError::new("Could not create download link"))?;
        anchor.set_href(url);
        anchor.set_download(file_name);

        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(js_error)?;
        Ok(())
    }
}

/// Downloads `cert` and returns the notice to queue.
pub fn download(cert: &Certificate, prefix: &str) -> Notice {
    info!(file = cert.file_name, "Downloading certificate");
    let notice = download_certificate(cert, prefix, &BrowserFileSaver);
    if notice.kind == ToastKind::Error {
        warn!(file = cert.file_name, message = %notice.message, "Certificate download failed");
    }
    notice
}

fn js_error(value: JsValue) -> DownloadError {
    DownloadError::new(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
