//! # Navbar
//!
//! Sticky header with the page links, a mobile menu toggle and a shadow
//! that appears once the window scrolls.

use signex_core::nav::{CALL_TO_ACTION, NAV_LINKS};
use signex_core::Page;
use tracing::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::state::{NavAction, NavState};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);
    let current = use_route::<Route>()
        .map(|route| Page::from(&route))
        .unwrap_or(Page::NotFound);

    // Scroll listener, removed on unmount
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let nav = nav.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    nav.dispatch(NavAction::Scroll(y));
                                }
                            }
                        }
                    });
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!(?err, "Could not attach scroll listener");
                    }
                    // Initial call
                    if let Ok(y) = window.scroll_y() {
                        nav.dispatch(NavAction::Scroll(y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_toggle = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Toggle))
    };
    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Close))
    };

    let link = |label: &'static str, page: Page, extra: &'static str| {
        let active = (page == current).then_some("active");
        html! {
            <span onclick={on_navigate.clone()}>
                <Link<Route> to={Route::from(page)} classes={classes!("nav-link", extra, active)}>
                    { label }
                </Link<Route>>
            </span>
        }
    };

    html! {
        <nav class={classes!("navbar", nav.menu.is_scrolled().then_some("scrolled"))}>
            <div class="container-custom navbar-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <img src="/Logo/signexLogo.png" alt="SignEx logo" class="brand-logo" />
                </Link<Route>>

                <div class="nav-links desktop">
                    { for NAV_LINKS.iter().map(|l| link(l.label, l.page, "")) }
                    { link(CALL_TO_ACTION.label, CALL_TO_ACTION.page, "btn btn-primary") }
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={nav.menu.is_open().to_string()}
                    onclick={on_toggle}
                >
                    { if nav.menu.is_open() { "✕" } else { "☰" } }
                </button>
            </div>

            if nav.menu.is_open() {
                <div class="nav-links mobile">
                    { for NAV_LINKS.iter().map(|l| link(l.label, l.page, "")) }
                    { link(CALL_TO_ACTION.label, CALL_TO_ACTION.page, "btn btn-primary") }
                </div>
            }
        </nav>
    }
}
