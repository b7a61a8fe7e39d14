//! # Gallery State
//!
//! Reducer around the gallery loader.

use std::rc::Rc;

use signex_core::{CoreResult, Gallery};
use tracing::{info, warn};
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub gallery: Gallery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    Begin,
    Finish(CoreResult<Vec<String>>),
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Begin => next.gallery.begin(),
            GalleryAction::Finish(result) => {
                match &result {
                    Ok(entries) => info!(count = entries.len(), "Gallery loaded"),
                    Err(err) => warn!(%err, "Gallery load failed"),
                }
                next.gallery.finish(result);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signex_core::{CoreError, GallerySource, StaticGallery};

    #[test]
    fn test_load_static_gallery() {
        let s = Rc::new(GalleryState::default());
        assert!(s.gallery.is_loading());

        let s = s
            .reduce(GalleryAction::Begin)
            .reduce(GalleryAction::Finish(StaticGallery::default().list()));
        assert!(!s.gallery.is_loading());
        assert_eq!(s.gallery.entries().len(), 16);
    }

    #[test]
    fn test_failed_load() {
        let s = Rc::new(GalleryState::default()).reduce(GalleryAction::Finish(Err(
            CoreError::Gallery("timeout".into()),
        )));
        assert!(s.gallery.error().is_some());
        assert!(s.gallery.entries().is_empty());
    }
}
