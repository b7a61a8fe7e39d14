//! # Home Page

use gloo_timers::callback::Interval;
use signex_core::content::{HIGHLIGHTS, SERVICE_TEASERS};
use signex_core::Typewriter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::state::{TypewriterAction, TypewriterState};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home">
            <Hero />

            <section class="section section-muted">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Premium Services" }</h2>
                        <p>{ "We provide comprehensive road safety solutions with the highest quality standards." }</p>
                    </div>
                    <div class="card-grid three">
                        { for SERVICE_TEASERS.iter().map(|teaser| html! {
                            <div class="card">
                                <svg class="card-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={teaser.icon_path} />
                                </svg>
                                <h3>{ teaser.title }</h3>
                                <p>{ teaser.description }</p>
                                <Link<Route> to={Route::Services} classes="card-link">{ "Learn more →" }</Link<Route>>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container-custom split">
                    <img
                        src="https://images.unsplash.com/photo-1541888946425-d81bb19240f5?auto=format&fit=crop&w=1950&q=80"
                        alt="About SignEx"
                        class="split-image"
                    />
                    <div class="split-body">
                        <h2>{ "Committed to Road Safety Excellence" }</h2>
                        <p>
                            { "For over 15 years, SignEx has been at the forefront of road safety infrastructure, \
                               providing high-quality signage and safety solutions for highways and roads across the country." }
                        </p>
                        <ul class="check-list">
                            { for HIGHLIGHTS.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                        <Link<Route> to={Route::About} classes="btn btn-primary">{ "Learn More About Us" }</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container-custom">
                    <h2>{ "Ready to Enhance Road Safety?" }</h2>
                    <p>{ "Contact us today for a consultation and quote on your road safety infrastructure needs." }</p>
                    <Link<Route> to={Route::Contact} classes="btn btn-light">{ "Get in Touch" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}

/// Full-width hero with the typewriter headline.
#[function_component(Hero)]
fn hero() -> Html {
    let state = use_reducer(TypewriterState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let handle = Interval::new(Typewriter::tick_interval_ms(), move || {
                    state.dispatch(TypewriterAction::Tick);
                });
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <div class="hero">
            <div class="hero-overlay" />
            <div class="hero-content">
                <h1 class="hero-title">
                    <span>{ state.writer.text().to_string() }</span>
                    <span class="caret" aria-hidden="true">{ "|" }</span>
                </h1>
            </div>
        </div>
    }
}
