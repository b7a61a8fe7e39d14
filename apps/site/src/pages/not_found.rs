//! # Not Found Page

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="section not-found">
            <div class="container-custom section-intro">
                <h1 class="not-found-code">{ "404" }</h1>
                <h2>{ "Page Not Found" }</h2>
                <p>{ "The page you are looking for doesn't exist or has been moved." }</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to Home" }</Link<Route>>
            </div>
        </section>
    }
}
