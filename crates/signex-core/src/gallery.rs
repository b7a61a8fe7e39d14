//! # Gallery Loader
//!
//! Loads the list of gallery image files from a [`GallerySource`] and
//! tracks the loading / error state the media page renders.
//!
//! ```text
//! ┌──────────────┐  begin()   ┌──────────────┐  finish(Ok)   ┌─────────────┐
//! │ loading=true │ ─────────► │ loading=true │ ────────────► │ entries = N │
//! │ (initial)    │            │ error=None   │               │ loading=off │
//! └──────────────┘            └──────────────┘               └─────────────┘
//!                                    │ finish(Err)
//!                                    ▼
//!                             ┌──────────────┐
//!                             │ entries = [] │
//!                             │ error = msg  │
//!                             └──────────────┘
//! ```

use crate::content::GALLERY_FILES;
use crate::error::{CoreError, CoreResult};

/// Somewhere the gallery file list comes from.
pub trait GallerySource {
    /// Returns the image file names in display order.
    fn list(&self) -> CoreResult<Vec<String>>;
}

/// The fixed list of files shipped under `/gallery`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticGallery {
    files: Vec<String>,
}

impl StaticGallery {
    pub fn new(files: Vec<String>) -> Self {
        StaticGallery { files }
    }
}

impl Default for StaticGallery {
    fn default() -> Self {
        StaticGallery::new(GALLERY_FILES.iter().map(|f| f.to_string()).collect())
    }
}

impl GallerySource for StaticGallery {
    fn list(&self) -> CoreResult<Vec<String>> {
        Ok(self.files.clone())
    }
}

/// Gallery page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<String>,
    loading: bool,
    error: Option<String>,
}

impl Default for Gallery {
    fn default() -> Self {
        Gallery {
            entries: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a load as started and clears the previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Records the outcome of a load.
    pub fn finish(&mut self, result: CoreResult<Vec<String>>) {
        self.loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(err) => {
                self.entries.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Runs a complete load against `source`.
    pub fn activate(&mut self, source: &dyn GallerySource) {
        self.begin();
        self.finish(source.list());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loaded successfully but there is nothing to show.
    pub fn is_empty_loaded(&self) -> bool {
        !self.loading && self.error.is_none() && self.entries.is_empty()
    }

    /// Image URLs for every entry, in order.
    pub fn urls(&self, prefix: &str) -> Vec<String> {
        self.entries.iter().map(|f| image_url(prefix, f)).collect()
    }
}

/// Joins a URL prefix and a file name with exactly one slash.
pub fn image_url(prefix: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A source that always fails.
    struct UnavailableGallery;

    impl GallerySource for UnavailableGallery {
        fn list(&self) -> CoreResult<Vec<String>> {
            Err(CoreError::Gallery("gallery is unavailable".to_string()))
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let g = Gallery::new();
        assert!(g.is_loading());
        assert!(g.entries().is_empty());
        assert!(!g.is_empty_loaded());
    }

    #[test]
    fn test_activate_loads_static_list() {
        let mut g = Gallery::new();
        g.activate(&StaticGallery::default());

        assert!(!g.is_loading());
        assert_eq!(g.entries().len(), 16);
        assert_eq!(g.error(), None);

        let urls = g.urls("/gallery");
        assert_eq!(urls.len(), 16);
        assert!(urls.iter().all(|u| u.starts_with("/gallery/")));
    }

    #[test]
    fn test_failed_load_records_error() {
        let mut g = Gallery::new();
        g.activate(&StaticGallery::default());
        g.activate(&UnavailableGallery);

        assert!(!g.is_loading());
        assert!(g.entries().is_empty());
        assert_eq!(g.error(), Some("Gallery listing failed: gallery is unavailable"));
    }

    #[test]
    fn test_begin_clears_error() {
        let mut g = Gallery::new();
        g.activate(&UnavailableGallery);
        g.begin();
        assert!(g.is_loading());
        assert_eq!(g.error(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut g = Gallery::new();
        g.activate(&StaticGallery::new(Vec::new()));
        assert!(g.is_empty_loaded());
    }

    #[test]
    fn test_image_url_joins_once() {
        assert_eq!(image_url("/gallery", "a.jpg"), "/gallery/a.jpg");
        assert_eq!(image_url("/gallery/", "/a.jpg"), "/gallery/a.jpg");
    }
}
