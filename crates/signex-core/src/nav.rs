//! # Navigation
//!
//! The page table and the navbar's open/scrolled state.

use serde::{Deserialize, Serialize};

use crate::SCROLL_THRESHOLD;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    About,
    Services,
    Media,
    Contact,
    NotFound,
}

impl Page {
    /// Every routable page, in navbar order.
    pub const ROUTED: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Media,
        Page::Contact,
    ];

    /// Resolves a location path. Unknown paths are `NotFound`.
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ROUTED
            .iter()
            .copied()
            .find(|page| page.path() == normalized)
            .unwrap_or(Page::NotFound)
    }

    pub const fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Media => "/media",
            Page::Contact => "/contact",
            Page::NotFound => "/404",
        }
    }

    /// Document title.
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Home => "SignEx | Road Safety Solutions",
            Page::About => "About Us | SignEx",
            Page::Services => "Our Services | SignEx",
            Page::Media => "Media | SignEx",
            Page::Contact => "Contact Us | SignEx",
            Page::NotFound => "Page Not Found | SignEx",
        }
    }
}

/// A navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", page: Page::Home },
    NavLink { label: "About Us", page: Page::About },
    NavLink { label: "Our Services", page: Page::Services },
    NavLink { label: "Media", page: Page::Media },
    NavLink { label: "Contact Us", page: Page::Contact },
];

/// The call to action at the end of the navbar.
pub const CALL_TO_ACTION: NavLink = NavLink {
    label: "Get a Quote",
    page: Page::Contact,
};

/// Navbar state: mobile menu and the shadow shown once the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
    scrolled: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Updates the scrolled flag from the window's vertical offset.
    ///
    /// Returns whether the flag changed, so the caller can skip re-renders.
    pub fn observe_scroll(&mut self, y: f64) -> bool {
        let scrolled = y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_trailing_slash_and_unknown_paths() {
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/careers"), Page::NotFound);
        assert_eq!(Page::from_path("/about/team"), Page::NotFound);
    }

    #[test]
    fn test_nav_links_cover_every_page_once() {
        let pages: Vec<_> = NAV_LINKS.iter().map(|l| l.page).collect();
        assert_eq!(pages, Page::ROUTED);
        assert_eq!(CALL_TO_ACTION.page, Page::Contact);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_threshold() {
        let mut menu = NavMenu::default();
        assert!(!menu.observe_scroll(20.0));
        assert!(!menu.is_scrolled());

        assert!(menu.observe_scroll(21.0));
        assert!(menu.is_scrolled());
        assert!(!menu.observe_scroll(400.0));

        assert!(menu.observe_scroll(0.0));
        assert!(!menu.is_scrolled());
    }
}
