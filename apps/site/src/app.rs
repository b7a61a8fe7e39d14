//! # Root Component
//!
//! Provides configuration and the toast queue, then lays out the shell
//! every page shares.
//!
//! ```text
//! <ContextProvider<ConfigState>>
//!   <ContextProvider<ToastContext>>
//!     <BrowserRouter>
//!       <RouteObserver />     title, scroll-to-top, route logging
//!       <Navbar />
//!       <main> <Switch<Route> /> </main>
//!       <Footer />
//!       <ToastContainer />
//!     </BrowserRouter>
//! ```

use signex_core::Page;
use tracing::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar, ToastContainer};
use crate::routes::{switch, Route};
use crate::state::{ConfigState, ToastContext, ToastState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ConfigState,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let toasts: ToastContext = {
        let lifetime = props.config.toast_lifetime();
        use_reducer(move || ToastState::new(lifetime))
    };

    html! {
        <ContextProvider<ConfigState> context={props.config.clone()}>
            <ContextProvider<ToastContext> context={toasts}>
                <BrowserRouter>
                    <RouteObserver />
                    <div class="app">
                        <Navbar />
                        <main class="page">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                    <ToastContainer />
                </BrowserRouter>
            </ContextProvider<ToastContext>>
        </ContextProvider<ConfigState>>
    }
}

/// Updates the document title and scroll position on every route change.
#[function_component(RouteObserver)]
fn route_observer() -> Html {
    let page = use_route::<Route>()
        .map(|route| Page::from(&route))
        .unwrap_or(Page::NotFound);

    use_effect_with_deps(
        move |page: &Page| {
            info!(path = page.path(), "Route changed");
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    document.set_title(page.title());
                }
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        page,
    );

    html! {}
}
