//! # Routes
//!
//! The route table and the page each route renders.
//!
//! ```text
//! /          ──► HomePage
//! /about     ──► AboutPage
//! /services  ──► ServicesPage
//! /media     ──► MediaPage
//! /contact   ──► ContactPage
//! (anything) ──► NotFoundPage
//! ```

use signex_core::Page;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AboutPage, ContactPage, HomePage, MediaPage, NotFoundPage, ServicesPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/media")]
    Media,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Services => Page::Services,
            Route::Media => Page::Media,
            Route::Contact => Page::Contact,
            Route::NotFound => Page::NotFound,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::About => Route::About,
            Page::Services => Route::Services,
            Page::Media => Route::Media,
            Page::Contact => Route::Contact,
            Page::NotFound => Route::NotFound,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::Media => html! { <MediaPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_match_pages() {
        for route in [
            Route::Home,
            Route::About,
            Route::Services,
            Route::Media,
            Route::Contact,
            Route::NotFound,
        ] {
            let page = Page::from(&route);
            assert_eq!(route.to_path(), page.path());
            assert_eq!(Route::from(page), route);
        }
    }
}
